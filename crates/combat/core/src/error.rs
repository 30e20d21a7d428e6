//! Typed errors for behavior definition validation.

use crate::combo::MAX_COMBO_STEPS;

/// Errors raised while constructing a combo definition.
///
/// These are caller contract violations surfaced at definition time so the
/// per-tick sequencer never has to handle a malformed step list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ComboError {
    /// The step list was empty. A zero-length combo would short-circuit to
    /// inactive without ever invoking a behavior, so it is rejected up front.
    #[error("combo definition must contain at least one step")]
    Empty,

    /// The step list exceeded the fixed capacity of a combo sequence.
    #[error("combo definition has {len} steps, maximum is {MAX_COMBO_STEPS}")]
    TooManySteps { len: usize },
}
