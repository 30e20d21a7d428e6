//! Teleport and dash maneuver controllers.
//!
//! A maneuver is a short multi-phase movement action. Aggressive teleports
//! resolve in a single tick; chain dashes and teleport-dashes run for many
//! ticks through explicit per-agent state structs owned by the agent —
//! counters are never passed around as loose `&mut` scalars, so two
//! maneuvers can never alias the same storage.

mod chain_dash;
mod teleport;
mod teleport_dash;

pub use chain_dash::{ChainDashState, DASH_TRANSITION_TICKS, chain_dash_tick};
pub use teleport::{aggressive_teleport, should_teleport};
pub use teleport_dash::{
    TELEPORT_DASH_DECEL_TICKS, TeleportDashPhase, TeleportDashState, teleport_dash_apply,
    teleport_dash_done,
};

use crate::env::EffectTheme;

/// Discrete maneuver labels, used by the weighted attack selector and by
/// decision logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ManeuverKind {
    AggressiveTeleport,
    ChainDash,
    TeleportDash,
}

/// Parameters for an aggressive engage teleport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeleportSpec {
    /// Distance from the target at which the agent arrives.
    pub arrival_distance: f32,
    /// Leave a mirage decoy at the departure point.
    pub spawn_decoy: bool,
    pub theme: EffectTheme,
}

/// Parameters for a chained multi-dash assault.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainDashSpec {
    /// Dash segments before the maneuver completes.
    pub max_dashes: u32,
    /// Speed during a dash segment, units per tick.
    pub dash_speed: f32,
    /// Length of one dash segment in ticks.
    pub dash_duration: u32,
    /// Aim later segments at the target's predicted position when it moves.
    pub predict_movement: bool,
    /// Ticks of lead applied to the prediction.
    pub lookahead_ticks: f32,
    /// How far past the target a flanking segment extends.
    pub flank_distance: f32,
    pub theme: EffectTheme,
}

/// Parameters for a teleport-then-dash strike.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeleportDashSpec {
    /// Horizontal offset of the flank teleport point.
    pub teleport_distance: f32,
    /// Height above the target of the flank teleport point.
    pub hover_height: f32,
    /// Speed of the committed dash, units per tick.
    pub dash_speed: f32,
    /// Telegraph pause length in ticks before the dash commits.
    pub pause_ticks: u32,
    /// Committed dash length in ticks.
    pub dash_ticks: u32,
    pub theme: EffectTheme,
}

/// A maneuver request passed to [`crate::CombatEngine::start_maneuver`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ManeuverCommand {
    AggressiveTeleport(TeleportSpec),
    ChainDash(ChainDashSpec),
    TeleportDash(TeleportDashSpec),
}

impl ManeuverCommand {
    pub fn kind(&self) -> ManeuverKind {
        match self {
            Self::AggressiveTeleport(_) => ManeuverKind::AggressiveTeleport,
            Self::ChainDash(_) => ManeuverKind::ChainDash,
            Self::TeleportDash(_) => ManeuverKind::TeleportDash,
        }
    }
}

/// A multi-tick maneuver in progress, stored on the agent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActiveManeuver {
    ChainDash {
        spec: ChainDashSpec,
        state: ChainDashState,
    },
    TeleportDash {
        spec: TeleportDashSpec,
        state: TeleportDashState,
    },
}

impl ActiveManeuver {
    pub fn kind(&self) -> ManeuverKind {
        match self {
            Self::ChainDash { .. } => ManeuverKind::ChainDash,
            Self::TeleportDash { .. } => ManeuverKind::TeleportDash,
        }
    }
}
