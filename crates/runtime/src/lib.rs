//! Host-facing driver layer for the combat core.
//!
//! The runtime owns what the deterministic core deliberately does not:
//! agent lifecycle (register on spawn, unregister on death), the per-tick
//! decision director that chooses when to engage, punish, and attack, the
//! host-side aging of mirage decoys, concrete oracle implementations, and
//! an effect event recorder hosts drain once per frame.
//!
//! A minimal host loop:
//!
//! ```ignore
//! let mut world = CombatWorld::new(CombatTuning::default(), arena, seed);
//! let boss = world.register(presets::revenant(), spawn_point, boss_size);
//! loop {
//!     world.tick(&target_snapshot);
//!     for event in world.effects.drain() { render(event); }
//! }
//! world.unregister(boss)?;
//! ```

pub mod director;
pub mod error;
pub mod events;
pub mod mirage;
pub mod oracle;
pub mod registry;

pub use director::BossDirector;
pub use error::RuntimeError;
pub use events::{EffectEvent, ProjectileEvent, RecordingEffects, RecordingProjectiles};
pub use mirage::update_mirages;
pub use oracle::{ArenaCollision, EntropyRng};
pub use registry::{AgentEntry, AgentRegistry, CombatWorld};
