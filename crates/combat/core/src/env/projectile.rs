//! Projectile spawning consumed by barrage-style attacks.

use crate::math::Vec2;

/// Opaque projectile type identifier from the host's projectile table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileKind(pub u16);

/// Handle to a spawned projectile. The core never inspects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectileHandle(pub u32);

/// Spawns projectiles on behalf of combo steps and punishment barrages.
pub trait ProjectileSpawner {
    fn spawn(
        &mut self,
        origin: Vec2,
        velocity: Vec2,
        kind: ProjectileKind,
        damage: f32,
        knockback: f32,
    ) -> ProjectileHandle;
}

/// Spawner that swallows requests, handing back sequential handles.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullProjectiles {
    next: u32,
}

impl ProjectileSpawner for NullProjectiles {
    fn spawn(&mut self, _: Vec2, _: Vec2, _: ProjectileKind, _: f32, _: f32) -> ProjectileHandle {
        let handle = ProjectileHandle(self.next);
        self.next = self.next.wrapping_add(1);
        handle
    }
}
