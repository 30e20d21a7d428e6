//! Data-driven boss behavior content.
//!
//! This crate houses boss behavior profiles and their loaders:
//! - Behavior profiles: attack roster with selection weights, combo step
//!   lists, timing settings, and effect themes (data-driven via RON)
//! - Built-in presets for the shipped bosses
//!
//! Profiles are plain data consumed by the runtime's director; they never
//! appear in per-tick combat state. Loaders use combat-core types directly
//! with serde for RON deserialization.

pub mod presets;
pub mod profile;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use profile::{BeatSettings, BossProfile, NamedCombo, RosterEntry};

#[cfg(feature = "loaders")]
pub use loaders::ProfileLoader;
