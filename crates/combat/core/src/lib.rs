//! Deterministic boss combat behavior core.
//!
//! This crate drives the moment-to-moment combat behavior of a boss-type
//! agent in a real-time action game: closing distance on a target, executing
//! multi-step dash/teleport maneuvers, sequencing timed combo attacks,
//! scaling aggression with distance, and detecting and punishing evasive
//! play. It is pure tick-driven logic: the host calls [`CombatEngine::tick`]
//! once per fixed-rate simulation step and the core mutates agent state and
//! emits fire-and-forget effect requests through the traits in [`env`].
//!
//! # Architecture
//!
//! - **Explicit state**: every counter lives in a per-agent state struct
//!   ([`state::CombatAgent`] and the maneuver states in [`maneuver`]); there
//!   are no ambient statics and no shared mutable storage between agents.
//! - **Environment traits**: collision resolution, VFX/sound requests,
//!   projectile spawning, and randomness are consumed through the traits in
//!   [`env`], bundled per tick into an [`env::EnvContext`].
//! - **Deterministic**: given the same [`env::RngSource`] sequence the core
//!   makes identical decisions. In a networked host exactly one peer runs
//!   the core for a given agent; replicas only copy position/velocity.
//!
//! # Components
//!
//! - [`timer`]: bounded hysteresis counters (rise under a condition, decay
//!   otherwise) used by punishment detection
//! - [`selector`]: weighted random attack selection with repeat avoidance
//! - [`rhythm`]: beat and phrase timing helpers for attack cadence
//! - [`maneuver`]: teleport, chain-dash, and teleport-dash controllers
//! - [`combo`]: ordered timed attack step sequencing
//! - [`aggression`]: distance aggression scaling and cheese punishment
//! - [`state`]: agent, target, and mirage data model

pub mod aggression;
pub mod combo;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod maneuver;
pub mod math;
pub mod rhythm;
pub mod selector;
pub mod state;
pub mod timer;

pub use aggression::{CheesePunishmentTracker, PunishmentLevel};
pub use combo::{ComboDefinition, ComboSequence, ComboStep, MAX_COMBO_STEPS, StepKind};
pub use config::CombatTuning;
pub use engine::CombatEngine;
pub use env::{
    CollisionOracle, EffectColor, EffectSink, EffectTheme, EnvContext, NullEffects,
    NullProjectiles, PassthroughCollision, PcgRng, ProjectileHandle, ProjectileKind,
    ProjectileSpawner, RngSource, SoundId,
};
pub use error::ComboError;
pub use maneuver::{
    ActiveManeuver, ChainDashSpec, ChainDashState, ManeuverCommand, ManeuverKind,
    TeleportDashSpec, TeleportDashState, TeleportSpec,
};
pub use math::Vec2;
pub use state::{AgentId, CombatAgent, Facing, MirageRegistry, MirageState, TargetSnapshot};
pub use timer::HysteresisTimer;
