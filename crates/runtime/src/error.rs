//! Runtime errors.

use combat_core::AgentId;

/// Errors surfaced by the runtime driver layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuntimeError {
    /// The agent id is not registered (already unregistered, or never was).
    #[error("agent {0:?} is not registered")]
    UnknownAgent(AgentId),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
