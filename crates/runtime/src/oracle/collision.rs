//! Arena-bounds collision oracle.

use combat_core::{CollisionOracle, Vec2};

/// Collision oracle that clamps candidates into a rectangular arena,
/// keeping the agent's extent inside the walls.
///
/// Hosts with real tile geometry supply their own oracle; this one covers
/// open boss arenas. Like every collision oracle it is total — a candidate
/// already inside the arena comes back unchanged.
#[derive(Clone, Copy, Debug)]
pub struct ArenaCollision {
    pub min: Vec2,
    pub max: Vec2,
}

impl ArenaCollision {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }
}

impl CollisionOracle for ArenaCollision {
    fn resolve_safe_position(&self, candidate: Vec2, agent_size: Vec2) -> Vec2 {
        let half_w = agent_size.x * 0.5;
        let half_h = agent_size.y * 0.5;
        Vec2::new(
            candidate.x.clamp(self.min.x + half_w, self.max.x - half_w),
            candidate.y.clamp(self.min.y + half_h, self.max.y - half_h),
        )
    }
}
