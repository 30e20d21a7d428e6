//! Concrete oracle implementations for live hosts.

mod collision;
mod rng;

pub use collision::ArenaCollision;
pub use rng::EntropyRng;
