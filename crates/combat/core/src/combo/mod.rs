//! Combo attack sequencing.
//!
//! A combo is an ordered list of timed attack steps executed one after
//! another. Step behaviors are a tagged enum dispatched by match — combo
//! definitions contain no code, so they serialize cleanly into behavior
//! profiles and can be inspected by tools.

mod sequencer;
mod step;

pub use sequencer::{ComboSequence, tick_sequence};
pub use step::{ComboDefinition, ComboStep, MAX_COMBO_STEPS, StepKind, apply_step};
