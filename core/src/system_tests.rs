//! End-to-end scenarios over the assembled system.

use std::collections::HashSet;
use std::time::Duration;

use crate::config::{ConfigSync, WriteOrigin};
use crate::entity::{EntityId, EntityKind, TargetCandidate};
use crate::frame::FrameSignal;
use crate::system::GraceSystem;
use crate::targeting::SkipPredicate;

const SEC: Duration = Duration::from_secs(1);

fn make_system(duration_secs: u32) -> (GraceSystem, ConfigSync) {
    let mut config = ConfigSync::default();
    config
        .set_duration(duration_secs, WriteOrigin::Authoritative)
        .unwrap();
    let mut system = GraceSystem::new();
    system.initialize(&config, None);
    (system, config)
}

fn player(id: EntityId) -> TargetCandidate {
    TargetCandidate::new(id, EntityKind::Player, "player")
}

/// Advance `n` one-second idle frames.
fn idle_frames(system: &mut GraceSystem, n: u32) {
    let nobody: HashSet<EntityId> = HashSet::new();
    for _ in 0..n {
        system.advance_frame(&[], &nobody, SEC);
    }
}

fn teleport(system: &mut GraceSystem, entity_id: EntityId) {
    // The teleporting entity reports in-flight during its own frame.
    let in_flight: HashSet<EntityId> = [entity_id].into_iter().collect();
    let signals = [FrameSignal::TeleportCompleted {
        entity_id,
        success: true,
    }];
    system.advance_frame(&signals, &in_flight, SEC);
}

fn act(system: &mut GraceSystem, entity_id: EntityId) {
    let nobody: HashSet<EntityId> = HashSet::new();
    system.advance_frame(&[FrameSignal::ActionTaken { entity_id }], &nobody, SEC);
}

/// Duration 60s; teleport at t=0; excluded at t=20;
/// attack at t=30 cancels immediately; targetable at t=40.
#[test]
fn attack_mid_grace_reopens_targeting() {
    let (mut system, _config) = make_system(60);

    teleport(&mut system, 1); // t=0
    assert!(system.is_active(1));

    idle_frames(&mut system, 19); // t=20
    assert!(system.should_skip(&player(1), false), "AI excludes P at t=20");

    idle_frames(&mut system, 9);
    act(&mut system, 1); // t=30
    assert!(!system.is_active(1), "cancelled on the same tick");

    idle_frames(&mut system, 10); // t=40
    assert!(!system.should_skip(&player(1), false), "AI may include P");
}

/// Companion scenario: no action taken; excluded through t=59, eligible
/// again at t=60.
#[test]
fn untouched_grace_expires_at_exact_duration() {
    let (mut system, _config) = make_system(60);

    teleport(&mut system, 1); // t=0
    idle_frames(&mut system, 58); // t=59
    assert!(system.should_skip(&player(1), false));

    idle_frames(&mut system, 1); // t=60
    assert!(!system.should_skip(&player(1), false));
}

#[test]
fn duration_change_propagates_to_new_grants_only() {
    let (mut system, mut config) = make_system(60);

    teleport(&mut system, 1);
    config.set_duration(5, WriteOrigin::Authoritative).unwrap();
    system.sync_config(&config);

    teleport(&mut system, 2);
    assert_eq!(
        system.tracker().get(1).unwrap().duration,
        Duration::from_secs(60)
    );
    assert_eq!(
        system.tracker().get(2).unwrap().duration,
        Duration::from_secs(5)
    );
}

#[test]
fn sync_config_is_idempotent_per_version() {
    let (mut system, mut config) = make_system(60);

    config.set_duration(30, WriteOrigin::Authoritative).unwrap();
    system.sync_config(&config);
    system.sync_config(&config); // no-op

    teleport(&mut system, 1);
    assert_eq!(
        system.tracker().get(1).unwrap().duration,
        Duration::from_secs(30)
    );
}

#[test]
fn skip_predicate_surface_matches_direct_query() {
    let (mut system, _config) = make_system(60);
    teleport(&mut system, 1);

    let predicate: &dyn SkipPredicate = &system;
    assert!(predicate.should_skip(&player(1), false));
    assert!(predicate.should_skip(&player(2), true));
    assert!(!predicate.should_skip(&player(2), false));
}

#[test]
fn uninitialized_system_grants_nothing() {
    let mut system = GraceSystem::new();
    teleport(&mut system, 1);
    assert!(!system.is_active(1));
    assert!(!system.should_skip(&player(1), false));
}
