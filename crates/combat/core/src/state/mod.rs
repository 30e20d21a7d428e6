//! Agent, target, and mirage data model.
//!
//! This module owns the mutable per-agent combat state. The runtime layer
//! registers agents on spawn and unregisters them on death; while an agent
//! is alive its state is mutated exclusively through [`crate::CombatEngine`]
//! by the single authoritative tick call for that agent.

mod agent;
mod mirage;
mod target;

pub use agent::{CombatAgent, Facing};
pub use mirage::{MirageRegistry, MirageState};
pub use target::TargetSnapshot;

/// Stable identifier of a combat agent.
///
/// Allocated monotonically by the runtime registry and never reused, so a
/// mirage's back-reference can outlive its source agent without ambiguity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);
