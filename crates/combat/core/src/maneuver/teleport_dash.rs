//! Teleport-then-dash strike.

use crate::env::EnvContext;
use crate::maneuver::TeleportDashSpec;
use crate::math::Vec2;
use crate::state::{CombatAgent, Facing, TargetSnapshot};

/// Ticks of deceleration after the committed dash before the maneuver ends.
pub const TELEPORT_DASH_DECEL_TICKS: u32 = 20;

/// Ticks between dash trail emissions.
const DASH_TRAIL_INTERVAL: u32 = 4;

/// Velocity retained per tick after the dash completes.
const DECEL_FACTOR: f32 = 0.9;

/// Per-agent teleport-dash bookkeeping: a single phase timer. The phase is
/// a pure function of the timer value against the spec's two thresholds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TeleportDashState {
    /// Ticks since the maneuver began. Advanced by the engine, never by
    /// the controller.
    pub timer: u32,
}

/// Phase of a teleport-dash at a given timer value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeleportDashPhase {
    /// t = 0: relocate to a flank point above the target.
    Teleport,
    /// 0 < t < pause: committed telegraph hold.
    Telegraph,
    /// pause ≤ t < pause + dash: full-speed dash at the target.
    Dash,
    /// t ≥ pause + dash: bleed off speed.
    Decel,
}

impl TeleportDashPhase {
    /// Phase for `timer` under the spec's pause/dash thresholds.
    pub fn at(timer: u32, pause_ticks: u32, dash_ticks: u32) -> Self {
        if timer == 0 {
            Self::Teleport
        } else if timer < pause_ticks {
            Self::Telegraph
        } else if timer < pause_ticks + dash_ticks {
            Self::Dash
        } else {
            Self::Decel
        }
    }
}

/// Applies the teleport-dash behavior for the timer's current value.
///
/// The controller is purely a function of the timer: the caller advances
/// `state.timer` once per tick after invoking this, so re-invoking with the
/// same timer value (e.g. under replay) produces the same phase logic.
pub fn teleport_dash_apply(
    agent: &mut CombatAgent,
    target: &TargetSnapshot,
    spec: &TeleportDashSpec,
    timer: u32,
    env: &mut EnvContext<'_>,
) {
    match TeleportDashPhase::at(timer, spec.pause_ticks, spec.dash_ticks) {
        TeleportDashPhase::Teleport => {
            let side = if env.rng.chance(0.5) { 1.0 } else { -1.0 };
            let candidate = target.position
                + Vec2::new(side * spec.teleport_distance, -spec.hover_height);
            let arrival = env.collision.resolve_safe_position(candidate, agent.size);

            env.effects
                .burst_vfx(agent.position, spec.theme.primary, spec.theme.secondary, true);
            env.effects
                .burst_vfx(arrival, spec.theme.primary, spec.theme.secondary, false);
            env.effects.play_sound(spec.theme.sound, 1.0, 0.9, arrival);

            agent.position = arrival;
            agent.velocity = Vec2::ZERO;
            agent.facing = Facing::toward(target.position.x - arrival.x);
        }
        TeleportDashPhase::Telegraph => {
            if timer == 1 {
                env.effects
                    .ring_vfx(agent.position, spec.theme.secondary, 1.0, spec.pause_ticks);
            }
        }
        TeleportDashPhase::Dash => {
            if timer == spec.pause_ticks {
                let dir = (target.position - agent.position).normalized_or_zero();
                agent.velocity = dir * spec.dash_speed;
                agent.facing = Facing::toward(dir.x);
                env.effects.burst_vfx(
                    agent.position,
                    spec.theme.primary,
                    spec.theme.secondary,
                    false,
                );
                env.effects
                    .play_sound(spec.theme.sound, 1.2, 1.0, agent.position);
            }
            if timer % DASH_TRAIL_INTERVAL == 0 {
                env.effects
                    .trail_vfx(agent.position, agent.velocity, spec.theme.secondary);
            }
        }
        TeleportDashPhase::Decel => {
            agent.velocity = agent.velocity * DECEL_FACTOR;
        }
    }
}

/// Whether the maneuver has run its full course at `timer`.
pub fn teleport_dash_done(spec: &TeleportDashSpec, timer: u32) -> bool {
    timer >= spec.pause_ticks + spec.dash_ticks + TELEPORT_DASH_DECEL_TICKS
}
