//! Per-agent combat engine.
//!
//! The [`CombatEngine`] is the single mutation path for an agent's combat
//! state. The host constructs one around the agent each tick (it is a thin
//! borrow, not a long-lived object), passes in the collaborator context and
//! the current target snapshot, and the engine advances whichever maneuver
//! or combo is active. In a multi-peer host exactly one peer may do this
//! for a given agent; replicas copy the resulting position/velocity.

use crate::combo::{ComboDefinition, tick_sequence};
use crate::config::CombatTuning;
use crate::env::EnvContext;
use crate::maneuver::{
    ActiveManeuver, ChainDashState, ManeuverCommand, TeleportDashState, aggressive_teleport,
    chain_dash_tick, teleport_dash_apply, teleport_dash_done,
};
use crate::state::{CombatAgent, TargetSnapshot};

/// Engine over one agent's combat state.
pub struct CombatEngine<'a> {
    agent: &'a mut CombatAgent,
    tuning: &'a CombatTuning,
}

impl<'a> CombatEngine<'a> {
    /// Creates an engine borrowing the given agent.
    pub fn new(agent: &'a mut CombatAgent, tuning: &'a CombatTuning) -> Self {
        Self { agent, tuning }
    }

    /// Advances the agent's active maneuver or combo by one simulation
    /// tick, then integrates velocity into position.
    ///
    /// A running maneuver takes precedence over a running combo; combos
    /// resume on the tick after the maneuver completes.
    pub fn tick(&mut self, env: &mut EnvContext<'_>, target: &TargetSnapshot) {
        match self.agent.maneuver {
            Some(ActiveManeuver::ChainDash { spec, mut state }) => {
                let alive = chain_dash_tick(self.agent, target, &spec, &mut state, env);
                self.agent.maneuver =
                    alive.then_some(ActiveManeuver::ChainDash { spec, state });
            }
            Some(ActiveManeuver::TeleportDash { spec, mut state }) => {
                teleport_dash_apply(self.agent, target, &spec, state.timer, env);
                state.timer += 1;
                self.agent.maneuver = (!teleport_dash_done(&spec, state.timer))
                    .then_some(ActiveManeuver::TeleportDash { spec, state });
            }
            None => {
                let _ = tick_sequence(self.agent, target, env);
            }
        }

        // Maneuvers and steps steer by writing velocity; the engine owns
        // the kinematic step so they compose with host-set chase movement.
        self.agent.position += self.agent.velocity;
    }

    /// Begins a combo sequence. Refuses (no-op, false) while one is
    /// already active.
    pub fn start_combo(&mut self, definition: &ComboDefinition) -> bool {
        self.agent.combo.begin(definition)
    }

    /// Begins a maneuver. Refuses (no-op, false) while another maneuver is
    /// active. Aggressive teleports resolve immediately within this call;
    /// the multi-tick maneuvers arm state that subsequent `tick` calls
    /// advance.
    pub fn start_maneuver(
        &mut self,
        env: &mut EnvContext<'_>,
        target: &TargetSnapshot,
        command: ManeuverCommand,
    ) -> bool {
        if self.agent.maneuver.is_some() {
            return false;
        }
        match command {
            ManeuverCommand::AggressiveTeleport(spec) => {
                aggressive_teleport(self.agent, target, &spec, self.tuning, env);
            }
            ManeuverCommand::ChainDash(spec) => {
                let state = ChainDashState::begin(self.agent, target, &spec, env);
                self.agent.maneuver = Some(ActiveManeuver::ChainDash { spec, state });
            }
            ManeuverCommand::TeleportDash(spec) => {
                self.agent.maneuver = Some(ActiveManeuver::TeleportDash {
                    spec,
                    state: TeleportDashState::default(),
                });
            }
        }
        true
    }

    /// Abandons any running maneuver and combo. Idempotent and safe from
    /// any state; punishment evidence on the tracker is left untouched.
    pub fn reset(&mut self) {
        self.agent.maneuver = None;
        self.agent.combo.reset();
    }

    /// Whether a maneuver or combo is currently running.
    pub fn is_busy(&self) -> bool {
        self.agent.maneuver.is_some() || self.agent.combo.is_active()
    }
}
