//! Aggressive engage teleport.

use core::f32::consts::{FRAC_PI_4, PI};

use crate::config::CombatTuning;
use crate::env::EnvContext;
use crate::maneuver::TeleportSpec;
use crate::math::Vec2;
use crate::state::{CombatAgent, Facing, MirageState, TargetSnapshot};

/// Target horizontal speed below which arrival placement ignores movement.
const MOVEMENT_EPSILON: f32 = 0.05;

/// Half-angle of the arrival cone when biasing toward target movement.
const ARRIVAL_CONE: f32 = FRAC_PI_4;

/// Whether the agent should close distance by teleporting: true iff the
/// straight-line distance to the target exceeds `threshold_distance`.
/// Pure predicate, no side effects.
pub fn should_teleport(
    agent: &CombatAgent,
    target: &TargetSnapshot,
    threshold_distance: f32,
) -> bool {
    agent.distance_to(target.position) > threshold_distance
}

/// Teleports the agent to an arrival point near the target.
///
/// The arrival angle is uniform random, except that when the target has
/// horizontal movement there is a 50% bias toward cutting off its path: the
/// angle is then drawn from a cone around the movement direction. The
/// requested point is collision-corrected before use; an unresolved
/// correction degrades to the requested point, so this never fails.
pub fn aggressive_teleport(
    agent: &mut CombatAgent,
    target: &TargetSnapshot,
    spec: &TeleportSpec,
    tuning: &CombatTuning,
    env: &mut EnvContext<'_>,
) {
    let moving = target.velocity.x.abs() > MOVEMENT_EPSILON;
    let angle = if moving && env.rng.chance(0.5) {
        let heading = if target.velocity.x > 0.0 { 0.0 } else { PI };
        heading + env.rng.range_f32(-ARRIVAL_CONE, ARRIVAL_CONE)
    } else {
        env.rng.angle()
    };

    let candidate = target.position + Vec2::from_angle(angle) * spec.arrival_distance;
    let arrival = env.collision.resolve_safe_position(candidate, agent.size);
    let departure = agent.position;

    if spec.spawn_decoy {
        env.mirages.spawn(MirageState::decoy(
            agent.id,
            departure,
            agent.rotation,
            agent.scale,
            spec.theme.primary,
            tuning.decoy_lifetime,
        ));
    }

    env.effects
        .burst_vfx(departure, spec.theme.primary, spec.theme.secondary, true);
    env.effects
        .burst_vfx(arrival, spec.theme.primary, spec.theme.secondary, false);
    let pitch = env.rng.range_f32(0.9, 1.1);
    env.effects.play_sound(spec.theme.sound, pitch, 1.0, arrival);

    agent.position = arrival;
    agent.velocity = Vec2::ZERO;
    agent.facing = Facing::toward(target.position.x - arrival.x);
}
