//! Combo sequence state machine.

use arrayvec::ArrayVec;

use crate::combo::step::{ComboDefinition, ComboStep, MAX_COMBO_STEPS, apply_step};
use crate::env::EnvContext;
use crate::state::{CombatAgent, TargetSnapshot};

/// Per-agent combo bookkeeping: the step list of the running sequence plus
/// a current-step index, a step-local elapsed-tick counter, and an active
/// flag.
///
/// States: **Inactive** → **Running\[step i\]** for i in \[0, len) →
/// **Inactive**. While the flag is false the index and counter are
/// meaningless and held at zero, so a completed sequence behaves exactly
/// like a freshly constructed one — starting a new combo on a used state
/// object carries no residue.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComboSequence {
    steps: ArrayVec<ComboStep, MAX_COMBO_STEPS>,
    index: usize,
    elapsed: u32,
    active: bool,
}

impl ComboSequence {
    /// Arms the sequence with `definition` and activates it.
    ///
    /// Refuses (returns false, state untouched) while a sequence is
    /// already running.
    pub fn begin(&mut self, definition: &ComboDefinition) -> bool {
        if self.active {
            return false;
        }
        self.steps.clear();
        self.steps.extend(definition.steps().iter().copied());
        self.index = 0;
        self.elapsed = 0;
        self.active = true;
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Index of the step currently running. Zero while inactive.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Abandons the sequence from any state. Idempotent.
    pub fn reset(&mut self) {
        self.active = false;
        self.index = 0;
        self.elapsed = 0;
    }

    /// Advances bookkeeping after the current step ran one tick: bumps the
    /// elapsed counter, then moves to the next step or terminates when the
    /// configured duration has elapsed.
    fn advance(&mut self) {
        let duration = self.steps[self.index].duration;
        self.elapsed += 1;
        if self.elapsed >= duration {
            if self.index + 1 >= self.steps.len() {
                self.reset();
            } else {
                self.index += 1;
                self.elapsed = 0;
            }
        }
    }
}

/// Runs one tick of the agent's combo sequence.
///
/// Invokes the current step's behavior with its step-local tick count, then
/// advances. Returns true if a step executed this tick; false signals the
/// caller that the sequence is over and a new one may be started.
pub fn tick_sequence(
    agent: &mut CombatAgent,
    target: &TargetSnapshot,
    env: &mut EnvContext<'_>,
) -> bool {
    if !agent.combo.active {
        return false;
    }
    // A zero-length list cannot come from a validated definition, but the
    // state machine must still short-circuit rather than index out of
    // bounds.
    let Some(step) = agent.combo.steps.get(agent.combo.index).copied() else {
        agent.combo.reset();
        return false;
    };
    let local_tick = agent.combo.elapsed;
    apply_step(&step.kind, agent, target, local_tick, env);
    agent.combo.advance();
    true
}
