//! Combo step kinds and validated definitions.

use core::f32::consts::TAU;

use arrayvec::ArrayVec;

use crate::env::{EffectColor, EnvContext, ProjectileKind, SoundId};
use crate::error::ComboError;
use crate::math::Vec2;
use crate::state::{CombatAgent, Facing, TargetSnapshot};

/// Fixed capacity of a combo step list.
pub const MAX_COMBO_STEPS: usize = 8;

/// One attack behavior, dispatched per tick for the step's duration.
///
/// The behavior contract is `(agent, target, step-local tick)`: a step may
/// mutate agent velocity/position and emit arbitrary effect requests, and
/// returns nothing.
#[derive(Clone, Copy, Debug, PartialEq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// Hold position and show a warning ring before committing.
    Telegraph { color: EffectColor, sound: SoundId },

    /// Steer straight at the target's current position.
    DashToward { speed: f32 },

    /// Steer toward a hover point above the target.
    Hover { height: f32, speed: f32 },

    /// Radial projectile burst on the step's first tick.
    ProjectileRing {
        kind: ProjectileKind,
        count: u32,
        speed: f32,
        damage: f32,
        knockback: f32,
    },

    /// Aimed shot at the target every `interval` ticks.
    VolleyAtTarget {
        kind: ProjectileKind,
        interval: u32,
        speed: f32,
        damage: f32,
        knockback: f32,
    },

    /// Bleed off velocity by `factor` per tick.
    Brake { factor: f32 },
}

/// A step bound to its duration in ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboStep {
    pub kind: StepKind,
    pub duration: u32,
}

impl ComboStep {
    pub const fn new(kind: StepKind, duration: u32) -> Self {
        Self { kind, duration }
    }
}

/// Validated, immutable combo step list.
///
/// Construction rejects empty and over-capacity lists so the per-tick
/// sequencer never sees a malformed definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboDefinition {
    steps: ArrayVec<ComboStep, MAX_COMBO_STEPS>,
}

impl ComboDefinition {
    /// Builds a definition from a step list.
    pub fn new(steps: impl IntoIterator<Item = ComboStep>) -> Result<Self, ComboError> {
        let mut collected = ArrayVec::new();
        let mut len = 0usize;
        for step in steps {
            len += 1;
            if len <= MAX_COMBO_STEPS {
                collected.push(step);
            }
        }
        if len > MAX_COMBO_STEPS {
            return Err(ComboError::TooManySteps { len });
        }
        if collected.is_empty() {
            return Err(ComboError::Empty);
        }
        Ok(Self { steps: collected })
    }

    pub fn steps(&self) -> &[ComboStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total duration of the full sequence in ticks.
    pub fn total_ticks(&self) -> u32 {
        self.steps.iter().map(|s| s.duration).sum()
    }
}

/// Executes one tick of `kind` for the given step-local tick count.
pub fn apply_step(
    kind: &StepKind,
    agent: &mut CombatAgent,
    target: &TargetSnapshot,
    local_tick: u32,
    env: &mut EnvContext<'_>,
) {
    match *kind {
        StepKind::Telegraph { color, sound } => {
            if local_tick == 0 {
                env.effects.ring_vfx(agent.position, color, 1.2, 30);
                env.effects.play_sound(sound, 1.0, 0.8, agent.position);
            }
            agent.velocity = agent.velocity * 0.8;
        }
        StepKind::DashToward { speed } => {
            let dir = (target.position - agent.position).normalized_or_zero();
            agent.velocity = dir * speed;
            agent.facing = Facing::toward(dir.x);
        }
        StepKind::Hover { height, speed } => {
            let desired = target.position + Vec2::new(0.0, -height);
            let dir = (desired - agent.position).normalized_or_zero();
            agent.velocity = dir * speed;
            agent.facing = Facing::toward(target.position.x - agent.position.x);
        }
        StepKind::ProjectileRing {
            kind,
            count,
            speed,
            damage,
            knockback,
        } => {
            if local_tick == 0 {
                for i in 0..count {
                    let angle = TAU * i as f32 / count.max(1) as f32;
                    let velocity = Vec2::from_angle(angle) * speed;
                    let _ = env
                        .projectiles
                        .spawn(agent.position, velocity, kind, damage, knockback);
                }
            }
        }
        StepKind::VolleyAtTarget {
            kind,
            interval,
            speed,
            damage,
            knockback,
        } => {
            if local_tick % interval.max(1) == 0 {
                let dir = (target.position - agent.position).normalized_or_zero();
                let _ = env
                    .projectiles
                    .spawn(agent.position, dir * speed, kind, damage, knockback);
            }
        }
        StepKind::Brake { factor } => {
            agent.velocity = agent.velocity * factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(duration: u32) -> ComboStep {
        ComboStep::new(StepKind::Brake { factor: 0.9 }, duration)
    }

    #[test]
    fn empty_definition_is_rejected() {
        assert_eq!(ComboDefinition::new([]), Err(ComboError::Empty));
    }

    #[test]
    fn over_capacity_definition_is_rejected() {
        let steps = (0..=MAX_COMBO_STEPS as u32).map(step);
        assert!(matches!(
            ComboDefinition::new(steps),
            Err(ComboError::TooManySteps { .. })
        ));
    }

    #[test]
    fn total_ticks_sums_durations() {
        let def = ComboDefinition::new([step(10), step(15), step(20)]).unwrap();
        assert_eq!(def.total_ticks(), 45);
        assert_eq!(def.len(), 3);
    }
}
