//! Collision query consumed when teleporting.

use crate::math::Vec2;

/// Resolves a requested teleport destination against world geometry.
///
/// The query is total: when the implementation cannot improve the candidate
/// it returns it unchanged, so maneuver code never branches on failure.
pub trait CollisionOracle {
    /// Returns a position at or near `candidate` that an agent of extent
    /// `agent_size` can legally occupy.
    fn resolve_safe_position(&self, candidate: Vec2, agent_size: Vec2) -> Vec2;
}

/// Oracle that accepts every candidate unchanged. Used by tests and by
/// hosts whose worlds have no solid geometry.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughCollision;

impl CollisionOracle for PassthroughCollision {
    fn resolve_safe_position(&self, candidate: Vec2, _agent_size: Vec2) -> Vec2 {
        candidate
    }
}
