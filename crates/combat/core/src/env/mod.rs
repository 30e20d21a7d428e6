//! Traits describing the combat core's external collaborators.
//!
//! The core consumes four collaborator interfaces: collision resolution,
//! effect requests (VFX/sound/screen shake), projectile spawning, and
//! randomness. The [`EnvContext`] aggregate bundles the per-tick borrows so
//! engine code can access everything it needs without hard coupling to
//! concrete implementations.

mod collision;
mod effects;
mod projectile;
mod rng;

pub use collision::{CollisionOracle, PassthroughCollision};
pub use effects::{EffectColor, EffectSink, EffectTheme, NullEffects, SoundId};
pub use projectile::{NullProjectiles, ProjectileHandle, ProjectileKind, ProjectileSpawner};
pub use rng::{PcgRng, RngSource};

use crate::state::MirageRegistry;

/// Aggregates the collaborator borrows for one simulation tick.
///
/// Collision is a read-only query; the effect sink, projectile spawner, and
/// RNG are mutable because requests are one-way calls and every random draw
/// advances the authoritative stream. The mirage registry rides along so
/// maneuver code can append decoys without the engine threading an extra
/// parameter through every call.
pub struct EnvContext<'a> {
    pub collision: &'a dyn CollisionOracle,
    pub rng: &'a mut dyn RngSource,
    pub effects: &'a mut dyn EffectSink,
    pub projectiles: &'a mut dyn ProjectileSpawner,
    pub mirages: &'a mut MirageRegistry,
}

impl<'a> EnvContext<'a> {
    pub fn new(
        collision: &'a dyn CollisionOracle,
        rng: &'a mut dyn RngSource,
        effects: &'a mut dyn EffectSink,
        projectiles: &'a mut dyn ProjectileSpawner,
        mirages: &'a mut MirageRegistry,
    ) -> Self {
        Self {
            collision,
            rng,
            effects,
            projectiles,
            mirages,
        }
    }
}
