//! Combat agent state.

use crate::aggression::CheesePunishmentTracker;
use crate::combo::ComboSequence;
use crate::maneuver::ActiveManeuver;
use crate::math::Vec2;
use crate::state::AgentId;

/// Horizontal facing of an agent sprite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing toward a world-space x offset. Zero offset keeps `Right`.
    pub fn toward(dx: f32) -> Self {
        if dx < 0.0 { Self::Left } else { Self::Right }
    }

    /// Direction sign: -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// The boss entity under control of the combat core.
///
/// Created when the boss spawns and discarded on death or despawn. The
/// maneuver and combo fields are mutated once per tick by the engine; no
/// other code writes to them. Each agent exclusively owns its maneuver
/// state, combo sequence, and punishment tracker — nothing here is shared
/// between agents.
#[derive(Clone, Debug)]
pub struct CombatAgent {
    pub id: AgentId,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Sprite rotation in radians.
    pub rotation: f32,
    /// Render scale multiplier.
    pub scale: f32,
    pub facing: Facing,
    /// Collision extent passed to the collision oracle when teleporting.
    pub size: Vec2,
    /// Maneuver in progress, if any. `None` while idle or mid-combo.
    pub maneuver: Option<ActiveManeuver>,
    /// Combo bookkeeping; inactive while idle (see [`ComboSequence`]).
    pub combo: ComboSequence,
    /// Evasive-play detection timers for this agent.
    pub tracker: CheesePunishmentTracker,
}

impl CombatAgent {
    /// Spawns an agent at `position` with neutral kinematics.
    pub fn spawn(id: AgentId, position: Vec2, size: Vec2) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            scale: 1.0,
            facing: Facing::Right,
            size,
            maneuver: None,
            combo: ComboSequence::default(),
            tracker: CheesePunishmentTracker::default(),
        }
    }

    /// Straight-line distance from this agent to `point`.
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.position.distance(point)
    }
}
