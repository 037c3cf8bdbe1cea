//! Command handlers for the interactive driver.

use grace_core::{EntityId, EntityKind, TargetCandidate, WriteOrigin};

use crate::context::CliContext;

pub fn teleport(ctx: &mut CliContext, entity_id: EntityId, fail: bool) {
    ctx.queue_teleport(entity_id, !fail);
    let outcome = if fail { "failed" } else { "successful" };
    println!("queued {outcome} teleport for entity {entity_id} (next tick)");
}

pub fn action(ctx: &mut CliContext, entity_id: EntityId) {
    ctx.queue_action(entity_id);
    println!("queued deliberate action for entity {entity_id} (next tick)");
}

pub fn tick(ctx: &mut CliContext, secs: u32) {
    for _ in 0..secs.max(1) {
        ctx.advance();
    }
    println!("t={}s", ctx.clock_secs());
}

pub fn status(ctx: &CliContext) {
    println!("t={}s", ctx.clock_secs());
    if ctx.system.tracker().active_count() == 0 {
        println!("no active grace");
        return;
    }
    let mut entries: Vec<_> = ctx.system.active().collect();
    entries.sort_by_key(|g| g.entity_id);
    for grace in entries {
        println!(
            "entity {:>4}  {:>5.1}s / {:.0}s remaining",
            grace.entity_id,
            grace.remaining_secs(),
            grace.duration.as_secs_f32(),
        );
    }
}

pub fn query(ctx: &CliContext, entity_id: EntityId, npc: bool, base_skip: bool) {
    let kind = if npc { EntityKind::Npc } else { EntityKind::Player };
    let candidate = TargetCandidate::new(entity_id, kind, format!("entity-{entity_id}"));
    let skipped = ctx.system.should_skip_target(&candidate, base_skip);
    println!(
        "entity {entity_id}: {}",
        if skipped {
            "skipped by AI targeting"
        } else {
            "targetable"
        }
    );
}

pub fn set_duration(ctx: &mut CliContext, secs: u32, remote: bool) {
    let origin = if remote {
        WriteOrigin::Replica
    } else {
        WriteOrigin::Authoritative
    };
    match ctx.config.set_duration(secs, origin) {
        Ok(()) => println!("grace duration set to {secs}s (applies to new grants)"),
        Err(err) => println!("rejected: {err}"),
    }
}

pub fn set_lock(ctx: &mut CliContext, locked: bool, remote: bool) {
    let origin = if remote {
        WriteOrigin::Replica
    } else {
        WriteOrigin::Authoritative
    };
    match ctx.config.set_locked(locked, origin) {
        Ok(()) => println!("configuration lock: {locked}"),
        Err(err) => println!("rejected: {err}"),
    }
}

pub fn show_config(ctx: &CliContext) {
    println!(
        "duration: {}s  locked: {}  version: {}",
        ctx.config.duration_secs(),
        ctx.config.locked(),
        ctx.config.version(),
    );
    match ctx.system.tracker().definition() {
        Some(def) => println!(
            "definition: '{}' ({}s, icon: {})",
            def.name,
            def.duration_secs,
            def.icon.as_ref().map_or("none", |i| i.name.as_str()),
        ),
        None => println!("definition: not initialized"),
    }
}

pub fn save(ctx: &CliContext) {
    match ctx.config.save() {
        Ok(()) => println!("configuration saved"),
        Err(err) => println!("save failed: {err}"),
    }
}
