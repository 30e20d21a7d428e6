//! Read-only target snapshot.

use crate::math::Vec2;

/// Per-tick snapshot of the opposing player.
///
/// Owned by the host; the core reads it and never writes back. A fresh
/// snapshot is expected every tick — the core does not detect staleness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining health in [0, 1].
    pub health_fraction: f32,
}

impl TargetSnapshot {
    /// Snapshot of a stationary, full-health target at `position`.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            health_fraction: 1.0,
        }
    }

    /// Current speed in units per tick.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
