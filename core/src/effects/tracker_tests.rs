//! Tests for the grace tracker lifecycle.
//!
//! Verifies that:
//! - Instances are created, refreshed, removed and aged correctly
//! - Operations no-op while the definition store is uninitialized
//! - Duration changes affect only subsequently applied instances

use std::time::Duration;

use super::GraceTracker;

const SEC: Duration = Duration::from_secs(1);

/// Tracker with the definition installed at the given duration.
fn make_tracker(duration_secs: u32) -> GraceTracker {
    let mut tracker = GraceTracker::new();
    tracker.initialize(duration_secs, None);
    tracker
}

#[test]
fn apply_creates_active_instance() {
    let mut tracker = make_tracker(60);

    assert!(tracker.apply(1));
    assert!(tracker.is_active(1));
    assert!(!tracker.is_active(2));
    assert_eq!(tracker.active_count(), 1);

    let grace = tracker.get(1).unwrap();
    assert_eq!(grace.entity_id, 1);
    assert_eq!(grace.remaining, Duration::from_secs(60));
}

#[test]
fn apply_before_initialize_is_noop() {
    let mut tracker = GraceTracker::new();

    assert!(!tracker.apply(1));
    assert!(!tracker.is_active(1));

    // Resolves once initialization completes.
    tracker.initialize(60, None);
    assert!(tracker.apply(1));
    assert!(tracker.is_active(1));
}

#[test]
fn reapply_refreshes_to_full_ttl() {
    let mut tracker = make_tracker(60);
    tracker.apply(1);
    tracker.tick(Duration::from_secs(40));
    assert_eq!(tracker.get(1).unwrap().remaining, Duration::from_secs(20));

    tracker.apply(1);
    assert_eq!(tracker.get(1).unwrap().remaining, Duration::from_secs(60));
    assert_eq!(tracker.active_count(), 1, "no duplicate entries per entity");
}

#[test]
fn remove_is_idempotent() {
    let mut tracker = make_tracker(60);
    tracker.apply(1);

    assert!(tracker.remove(1));
    assert!(!tracker.is_active(1));
    assert!(!tracker.remove(1), "second remove is a no-op");
}

#[test]
fn tick_expires_after_exact_duration() {
    let mut tracker = make_tracker(3);
    tracker.apply(1);

    tracker.tick(SEC);
    assert!(tracker.is_active(1));
    tracker.tick(SEC);
    assert!(tracker.is_active(1));
    tracker.tick(SEC);
    assert!(!tracker.is_active(1), "ttl reaching zero removes the entry");

    // Stays false afterwards.
    tracker.tick(SEC);
    assert!(!tracker.is_active(1));
}

#[test]
fn tick_with_no_entries_is_noop() {
    let mut tracker = make_tracker(60);
    tracker.tick(SEC);
    assert_eq!(tracker.active_count(), 0);
}

#[test]
fn oversized_delta_expires_entry() {
    let mut tracker = make_tracker(5);
    tracker.apply(1);
    tracker.tick(Duration::from_secs(300));
    assert!(!tracker.is_active(1));
}

#[test]
fn duration_change_only_affects_new_instances() {
    let mut tracker = make_tracker(60);
    tracker.apply(1);

    tracker.set_duration(10);
    assert_eq!(
        tracker.get(1).unwrap().duration,
        Duration::from_secs(60),
        "existing instance keeps its creation-time duration"
    );

    tracker.apply(2);
    assert_eq!(tracker.get(2).unwrap().duration, Duration::from_secs(10));

    // Refreshing an old instance picks up the new duration.
    tracker.apply(1);
    assert_eq!(tracker.get(1).unwrap().duration, Duration::from_secs(10));
}

#[test]
fn independent_entities_age_independently() {
    let mut tracker = make_tracker(10);
    tracker.apply(1);
    tracker.tick(Duration::from_secs(6));
    tracker.apply(2);
    tracker.tick(Duration::from_secs(5));

    assert!(!tracker.is_active(1));
    assert!(tracker.is_active(2));
}

#[test]
fn clear_drops_everything() {
    let mut tracker = make_tracker(60);
    tracker.apply(1);
    tracker.apply(2);
    tracker.clear();
    assert_eq!(tracker.active_count(), 0);
}
