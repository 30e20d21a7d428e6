//! Beat and phrase timing helpers.
//!
//! Attack cadence and visual intensity elsewhere in the system are
//! modulated musically: combos prefer to start on a beat, and particle
//! density follows a tension-build/release envelope over a phrase. Both
//! helpers are pure functions of the tick counter.

/// Simulation ticks per minute (60 ticks/sec fixed step).
pub const TICKS_PER_MINUTE: f32 = 3600.0;

/// Half-width of the on-beat window, as a fraction of one beat.
const BEAT_WINDOW: f32 = 0.05;

/// True when `tick` lands within the on-beat window of a beat boundary.
///
/// The beat phase is `(tick × bpm / 3600) × subdivision mod 1`; the window
/// covers the 5% of a beat on either side of the boundary, so beats repeat
/// with period `3600 / (bpm × subdivision)` ticks and tick 0 is always on
/// beat.
pub fn is_on_beat(tick: u64, bpm: f32, subdivision: f32) -> bool {
    let phase = (tick as f32 * bpm / TICKS_PER_MINUTE) * subdivision;
    let frac = phase.fract();
    frac < BEAT_WINDOW || frac > 1.0 - BEAT_WINDOW
}

/// Tension/release intensity envelope over a phrase of `phrase_length`
/// ticks, in [0.5, 1.0].
///
/// Piecewise linear: rises 0.5→0.8 over the first 60% of the phrase, 0.8→1.0
/// over the next 20%, then falls back 1.0→0.5 over the final 20%.
pub fn musical_intensity(tick: u64, phrase_length: u64) -> f32 {
    debug_assert!(phrase_length > 0, "phrase_length must be non-zero");
    let t = (tick % phrase_length.max(1)) as f32 / phrase_length.max(1) as f32;
    if t < 0.6 {
        0.5 + (t / 0.6) * 0.3
    } else if t < 0.8 {
        0.8 + ((t - 0.6) / 0.2) * 0.2
    } else {
        1.0 - ((t - 0.8) / 0.2) * 0.5
    }
}
