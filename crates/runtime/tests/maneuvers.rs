//! End-to-end engagement behavior through the world driver.

use combat_core::{CombatTuning, TargetSnapshot, Vec2};
use runtime::{ArenaCollision, CombatWorld, EffectEvent};

fn arena() -> ArenaCollision {
    ArenaCollision::new(Vec2::new(-3000.0, -3000.0), Vec2::new(3000.0, 3000.0))
}

#[test]
fn distant_boss_closes_in_through_roster_maneuvers() {
    let mut world = CombatWorld::new(CombatTuning::default(), arena(), 99);
    let profile = combat_content::presets::revenant();
    let threshold = profile.teleport_threshold;
    let boss = world.register(profile, Vec2::new(-2500.0, -800.0), Vec2::new(48.0, 48.0));

    // Keep the target gently moving so the stationary detector stays quiet
    let mut target = TargetSnapshot::at(Vec2::new(500.0, 0.0));
    target.velocity = Vec2::new(0.8, 0.0);

    let start_distance = world
        .registry
        .get(boss)
        .unwrap()
        .agent
        .position
        .distance(target.position);
    assert!(start_distance > threshold);

    let mut closed_in = false;
    for tick in 0..1_200u32 {
        target.position += target.velocity;
        world.tick(&target);
        let distance = world
            .registry
            .get(boss)
            .unwrap()
            .agent
            .position
            .distance(target.position);
        if distance <= threshold {
            closed_in = true;
            break;
        }
        assert!(tick < 1_199, "boss never closed the gap");
    }
    assert!(closed_in);

    // Engage maneuvers announce themselves: bursts and sounds were emitted
    let events = world.effects.events();
    assert!(events.iter().any(|e| matches!(e, EffectEvent::Burst { .. })));
    assert!(events.iter().any(|e| matches!(e, EffectEvent::Sound { .. })));
}

#[test]
fn close_boss_chases_without_teleporting() {
    let mut world = CombatWorld::new(CombatTuning::default(), arena(), 5);
    let profile = combat_content::presets::revenant();
    let boss = world.register(profile, Vec2::new(-200.0, 0.0), Vec2::new(48.0, 48.0));

    // Moving target inside the teleport threshold: the boss walks it down
    // rather than blinking around, so the gap never widens beyond what the
    // target's own movement accounts for
    let mut target = TargetSnapshot::at(Vec2::new(100.0, 0.0));
    target.velocity = Vec2::new(1.0, 0.0);

    let mut previous_distance = world
        .registry
        .get(boss)
        .unwrap()
        .agent
        .position
        .distance(target.position);
    for _ in 0..20 {
        target.position += target.velocity;
        world.tick(&target);
        let distance = world
            .registry
            .get(boss)
            .unwrap()
            .agent
            .position
            .distance(target.position);
        assert!(distance < previous_distance + 4.0);
        previous_distance = distance;
    }
}
