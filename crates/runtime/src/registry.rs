//! Agent registry and the bundled combat world.
//!
//! The registry implements the explicit lifecycle the core requires:
//! agents are registered on spawn and unregistered on death, ids are
//! allocated monotonically and never reused, and unregistering an agent
//! also clears its mirages from the shared registry. Nothing here is a
//! process-wide static — a host constructs as many worlds as it needs.

use std::collections::BTreeMap;

use combat_content::BossProfile;
use combat_core::{AgentId, CombatAgent, CombatTuning, EnvContext, MirageRegistry, TargetSnapshot, Vec2};

use crate::director::BossDirector;
use crate::error::{Result, RuntimeError};
use crate::events::{RecordingEffects, RecordingProjectiles};
use crate::mirage::update_mirages;
use crate::oracle::{ArenaCollision, EntropyRng};

/// One registered boss: its combat state plus its decision state.
pub struct AgentEntry {
    pub agent: CombatAgent,
    pub director: BossDirector,
}

/// Registry of live agents keyed by stable id.
///
/// Ordered map so per-tick iteration is id-ordered: every agent draws from
/// the shared random stream in a reproducible sequence.
pub struct AgentRegistry {
    agents: BTreeMap<AgentId, AgentEntry>,
    /// Sequential id allocator (monotonically increasing, never reused).
    next_id: u32,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self {
            agents: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Registers a freshly spawned boss and returns its id.
    pub fn register(&mut self, profile: BossProfile, position: Vec2, size: Vec2) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        let entry = AgentEntry {
            agent: CombatAgent::spawn(id, position, size),
            director: BossDirector::new(profile),
        };
        let _ = self.agents.insert(id, entry);
        tracing::debug!("AgentRegistry: registered agent {:?}", id);
        id
    }

    /// Unregisters a dead or despawned agent, dropping its state and its
    /// mirages.
    pub fn unregister(&mut self, id: AgentId, mirages: &mut MirageRegistry) -> Result<()> {
        if self.agents.remove(&id).is_none() {
            return Err(RuntimeError::UnknownAgent(id));
        }
        mirages.remove_agent(id);
        tracing::debug!("AgentRegistry: unregistered agent {:?}", id);
        Ok(())
    }

    pub fn get(&self, id: AgentId) -> Option<&AgentEntry> {
        self.agents.get(&id)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut AgentEntry> {
        self.agents.get_mut(&id)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&AgentId, &mut AgentEntry)> {
        self.agents.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a host needs to run boss combat in one arena: the agent
/// registry, shared mirage registry, collaborator implementations, and the
/// effect logs to drain each frame.
pub struct CombatWorld {
    pub tuning: CombatTuning,
    pub registry: AgentRegistry,
    pub mirages: MirageRegistry,
    pub effects: RecordingEffects,
    pub projectiles: RecordingProjectiles,
    pub collision: ArenaCollision,
    rng: EntropyRng,
}

impl CombatWorld {
    /// Creates a world with an explicit seed, so a replay or the
    /// authoritative peer of a networked session is reproducible.
    pub fn new(tuning: CombatTuning, collision: ArenaCollision, seed: u64) -> Self {
        Self {
            tuning,
            registry: AgentRegistry::new(),
            mirages: MirageRegistry::new(),
            effects: RecordingEffects::new(),
            projectiles: RecordingProjectiles::new(),
            collision,
            rng: EntropyRng::seeded(seed),
        }
    }

    /// Registers a boss into this world.
    pub fn register(&mut self, profile: BossProfile, position: Vec2, size: Vec2) -> AgentId {
        self.registry.register(profile, position, size)
    }

    /// Unregisters a boss, dropping its mirages with it.
    pub fn unregister(&mut self, id: AgentId) -> Result<()> {
        self.registry.unregister(id, &mut self.mirages)
    }

    /// Advances every registered agent and the mirage registry by one
    /// simulation tick against the given target snapshot.
    pub fn tick(&mut self, target: &TargetSnapshot) {
        for (_, entry) in self.registry.agents.iter_mut() {
            let mut env = EnvContext::new(
                &self.collision,
                &mut self.rng,
                &mut self.effects,
                &mut self.projectiles,
                &mut self.mirages,
            );
            entry
                .director
                .think(&mut entry.agent, target, &self.tuning, &mut env);
        }
        update_mirages(&mut self.mirages, &mut self.effects, &mut self.projectiles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_content::presets;
    use combat_core::{EffectColor, MirageState};

    fn arena() -> ArenaCollision {
        ArenaCollision::new(Vec2::new(-2000.0, -2000.0), Vec2::new(2000.0, 2000.0))
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut world = CombatWorld::new(CombatTuning::default(), arena(), 1);
        let first = world.register(presets::revenant(), Vec2::ZERO, Vec2::new(48.0, 48.0));
        world.unregister(first).unwrap();
        let second = world.register(presets::revenant(), Vec2::ZERO, Vec2::new(48.0, 48.0));
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn unregister_unknown_agent_is_an_error() {
        let mut world = CombatWorld::new(CombatTuning::default(), arena(), 1);
        assert!(matches!(
            world.unregister(AgentId(99)),
            Err(RuntimeError::UnknownAgent(AgentId(99)))
        ));
    }

    #[test]
    fn unregister_drops_the_agents_mirages() {
        let mut world = CombatWorld::new(CombatTuning::default(), arena(), 1);
        let boss = world.register(presets::revenant(), Vec2::ZERO, Vec2::new(48.0, 48.0));
        let other = world.register(presets::revenant(), Vec2::ZERO, Vec2::new(48.0, 48.0));
        world.mirages.spawn(MirageState::decoy(
            boss,
            Vec2::ZERO,
            0.0,
            1.0,
            EffectColor(0xffffffff),
            100,
        ));
        world.mirages.spawn(MirageState::decoy(
            other,
            Vec2::ZERO,
            0.0,
            1.0,
            EffectColor(0xffffffff),
            100,
        ));

        world.unregister(boss).unwrap();

        assert_eq!(world.mirages.len(), 1);
        assert_eq!(world.mirages.of_agent(other).count(), 1);
        assert!(world.registry.get(boss).is_none());
    }
}
