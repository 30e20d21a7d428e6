//! Short-lived decoy (mirage) entities.

use crate::env::EffectColor;
use crate::math::Vec2;
use crate::state::AgentId;

/// One decoy copy of an agent, spawned during certain maneuvers.
///
/// The core only appends mirages and exposes [`MirageState::is_active`];
/// aging, alpha fading, scheduled attacks, and removal are driven by
/// whichever host system iterates the registry each frame.
#[derive(Clone, Copy, Debug)]
pub struct MirageState {
    /// Non-owning back-reference to the agent this mirage copies.
    pub source: AgentId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub scale: f32,
    /// Render opacity in [0, 1].
    pub alpha: f32,
    /// Total lifetime in ticks.
    pub lifetime: u32,
    /// Ticks lived so far.
    pub elapsed: u32,
    pub color: EffectColor,
    /// Tick (relative to spawn) at which the mirage performs its scheduled
    /// attack, or `None` for a purely visual decoy.
    pub attack_frame: Option<u32>,
}

impl MirageState {
    /// A purely visual decoy frozen at the given pose.
    pub fn decoy(
        source: AgentId,
        position: Vec2,
        rotation: f32,
        scale: f32,
        color: EffectColor,
        lifetime: u32,
    ) -> Self {
        Self {
            source,
            position,
            velocity: Vec2::ZERO,
            rotation,
            scale,
            alpha: 1.0,
            lifetime,
            elapsed: 0,
            color,
            attack_frame: None,
        }
    }

    /// Whether the mirage is still live. Iterating systems drop entries for
    /// which this returns false.
    pub fn is_active(&self) -> bool {
        self.elapsed < self.lifetime
    }
}

/// Registry of all live mirages, partitioned by source agent through the
/// back-reference on each entry.
///
/// Constructed explicitly by the host (one per arena/world) — there is no
/// ambient global collection. Insertion order carries no meaning.
#[derive(Debug, Default)]
pub struct MirageRegistry {
    entries: Vec<MirageState>,
}

impl MirageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a mirage. Called from maneuver and punishment code.
    pub fn spawn(&mut self, mirage: MirageState) {
        self.entries.push(mirage);
    }

    /// All live entries, any order.
    pub fn iter(&self) -> impl Iterator<Item = &MirageState> {
        self.entries.iter()
    }

    /// Mutable access for the host system that ages mirages.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut MirageState> {
        self.entries.iter_mut()
    }

    /// Entries belonging to one agent.
    pub fn of_agent(&self, agent: AgentId) -> impl Iterator<Item = &MirageState> {
        self.entries.iter().filter(move |m| m.source == agent)
    }

    /// Drops entries whose lifetime has elapsed.
    pub fn prune_inactive(&mut self) {
        self.entries.retain(MirageState::is_active);
    }

    /// Drops every mirage sourced from `agent`. Called by the registry
    /// lifecycle when an agent despawns.
    pub fn remove_agent(&mut self, agent: AgentId) {
        self.entries.retain(|m| m.source != agent);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
