//! Host-side mirage aging.
//!
//! The core only appends mirages; this is the external system that iterates
//! the registry each frame — advancing lifetimes, fading alpha out over the
//! final quarter of each mirage's life, firing scheduled mirage attacks,
//! and pruning expired entries.

use core::f32::consts::TAU;

use combat_core::{EffectSink, MirageRegistry, ProjectileKind, ProjectileSpawner, Vec2};

/// Projectile type fired by mirage attacks.
const MIRAGE_BOLT: ProjectileKind = ProjectileKind(2);
const MIRAGE_BOLT_COUNT: u32 = 6;
const MIRAGE_BOLT_SPEED: f32 = 5.0;
const MIRAGE_BOLT_DAMAGE: f32 = 10.0;
const MIRAGE_BOLT_KNOCKBACK: f32 = 2.0;

/// Advances every mirage by one tick and prunes the expired ones.
pub fn update_mirages(
    mirages: &mut MirageRegistry,
    effects: &mut dyn EffectSink,
    projectiles: &mut dyn ProjectileSpawner,
) {
    for mirage in mirages.iter_mut() {
        mirage.elapsed += 1;
        mirage.position += mirage.velocity;

        // Fade out over the final quarter of the lifetime
        let fade_start = mirage.lifetime - mirage.lifetime / 4;
        if mirage.elapsed >= fade_start && mirage.lifetime > 0 {
            let fade_ticks = (mirage.lifetime - fade_start).max(1);
            let into_fade = mirage.elapsed - fade_start;
            mirage.alpha = (1.0 - into_fade as f32 / fade_ticks as f32).max(0.0);
        }

        if mirage.attack_frame == Some(mirage.elapsed) {
            effects.ring_vfx(mirage.position, mirage.color, 0.8, 20);
            for i in 0..MIRAGE_BOLT_COUNT {
                let angle = TAU * i as f32 / MIRAGE_BOLT_COUNT as f32;
                let _ = projectiles.spawn(
                    mirage.position,
                    Vec2::from_angle(angle) * MIRAGE_BOLT_SPEED,
                    MIRAGE_BOLT,
                    MIRAGE_BOLT_DAMAGE,
                    MIRAGE_BOLT_KNOCKBACK,
                );
            }
        }
    }
    mirages.prune_inactive();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{RecordingEffects, RecordingProjectiles};
    use combat_core::{AgentId, EffectColor, MirageState};

    fn decoy(lifetime: u32) -> MirageState {
        MirageState::decoy(
            AgentId(1),
            Vec2::new(10.0, 20.0),
            0.0,
            1.0,
            EffectColor(0xff00ffff),
            lifetime,
        )
    }

    #[test]
    fn mirages_age_fade_and_expire() {
        let mut mirages = MirageRegistry::new();
        mirages.spawn(decoy(40));

        let mut effects = RecordingEffects::new();
        let mut projectiles = RecordingProjectiles::new();

        for tick in 1..=40 {
            update_mirages(&mut mirages, &mut effects, &mut projectiles);
            if tick < 40 {
                let mirage = mirages.iter().next().unwrap();
                // Opaque until the final quarter, fading afterwards
                if tick <= 30 {
                    assert_eq!(mirage.alpha, 1.0);
                } else {
                    assert!(mirage.alpha < 1.0);
                }
            }
        }
        assert!(mirages.is_empty());
    }

    #[test]
    fn scheduled_attack_fires_exactly_once() {
        let mut mirages = MirageRegistry::new();
        let mut armed = decoy(60);
        armed.attack_frame = Some(15);
        mirages.spawn(armed);

        let mut effects = RecordingEffects::new();
        let mut projectiles = RecordingProjectiles::new();
        for _ in 0..60 {
            update_mirages(&mut mirages, &mut effects, &mut projectiles);
        }

        assert_eq!(projectiles.spawns().len(), MIRAGE_BOLT_COUNT as usize);
        assert!(
            projectiles
                .spawns()
                .iter()
                .all(|s| s.kind == MIRAGE_BOLT)
        );
    }
}
