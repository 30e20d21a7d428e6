//! Punishment execution observed through the recorded event log.

use combat_core::{
    AgentId, CombatAgent, CombatTuning, EnvContext, MirageRegistry, PassthroughCollision, PcgRng,
    PunishmentLevel, TargetSnapshot, Vec2,
    aggression::execute_punishment,
    env::EffectTheme,
};
use runtime::{ArenaCollision, CombatWorld, EffectEvent, RecordingEffects, RecordingProjectiles};

fn boss() -> CombatAgent {
    CombatAgent::spawn(AgentId(1), Vec2::new(-600.0, 0.0), Vec2::new(48.0, 48.0))
}

fn execute(level: PunishmentLevel) -> (CombatAgent, RecordingEffects, RecordingProjectiles, MirageRegistry) {
    let tuning = CombatTuning::default();
    let mut agent = boss();
    let target = TargetSnapshot::at(Vec2::ZERO);
    let collision = PassthroughCollision;
    let mut rng = PcgRng::new(2024);
    let mut effects = RecordingEffects::new();
    let mut projectiles = RecordingProjectiles::new();
    let mut mirages = MirageRegistry::new();
    {
        let mut env = EnvContext::new(
            &collision,
            &mut rng,
            &mut effects,
            &mut projectiles,
            &mut mirages,
        );
        execute_punishment(
            level,
            &mut agent,
            &target,
            &tuning,
            EffectTheme::PLAIN,
            &mut env,
        );
    }
    (agent, effects, projectiles, mirages)
}

#[test]
fn level_zero_is_a_no_op() {
    let (agent, effects, projectiles, mirages) = execute(PunishmentLevel::None);
    assert!(effects.events().is_empty());
    assert!(projectiles.spawns().is_empty());
    assert!(mirages.is_empty());
    assert_eq!(agent.position, boss().position);
}

#[test]
fn warning_emits_only_a_cosmetic_ring() {
    let (agent, effects, projectiles, mirages) = execute(PunishmentLevel::Warning);
    assert_eq!(effects.events().len(), 1);
    assert!(matches!(effects.events()[0], EffectEvent::Ring { .. }));
    assert!(projectiles.spawns().is_empty());
    assert!(mirages.is_empty());
    // No teleport on a warning
    assert_eq!(agent.position, boss().position);
}

#[test]
fn moderate_teleports_with_ring_and_decoy() {
    let tuning = CombatTuning::default();
    let (agent, effects, projectiles, mirages) = execute(PunishmentLevel::Moderate);

    let distance = agent.position.distance(Vec2::ZERO);
    assert!((distance - tuning.punish_teleport_distance).abs() < 0.01);
    assert_eq!(
        projectiles.spawns().len(),
        tuning.punish_ring_moderate as usize
    );
    assert_eq!(mirages.len(), 1);
    assert_eq!(effects.shake_count(), 0);
}

#[test]
fn severe_teleports_closer_with_formation_and_shake() {
    let tuning = CombatTuning::default();
    let (agent, effects, projectiles, mirages) = execute(PunishmentLevel::Severe);

    let distance = agent.position.distance(Vec2::ZERO);
    assert!((distance - tuning.punish_close_distance).abs() < 0.01);
    assert_eq!(projectiles.spawns().len(), tuning.punish_ring_heavy as usize);
    // The mirage formation surrounds the target, each armed to attack
    assert_eq!(mirages.len(), tuning.punish_mirage_count as usize);
    assert!(mirages.iter().all(|m| m.attack_frame.is_some()));
    assert_eq!(effects.shake_count(), 1);
}

#[test]
fn camping_escalates_to_severe_through_the_world() {
    let tuning = CombatTuning::default();
    let mut world = CombatWorld::new(
        tuning,
        ArenaCollision::new(Vec2::new(-3000.0, -3000.0), Vec2::new(3000.0, 3000.0)),
        7,
    );
    let _boss = world.register(
        combat_content::presets::revenant(),
        Vec2::new(-500.0, 0.0),
        Vec2::new(48.0, 48.0),
    );

    // A stationary target inside teleport range: the stationary timer
    // climbs 1/tick and must walk the boss through warning, moderate,
    // and severe exactly once each
    let target = TargetSnapshot::at(Vec2::ZERO);
    for _ in 0..400 {
        world.tick(&target);
    }

    assert!(world.effects.shake_count() >= 1);
    assert!(!world.projectiles.spawns().is_empty());
}
