//! Fire-and-forget effect requests.
//!
//! The core asks for visuals and audio through [`EffectSink`] and never
//! observes the result — requests cannot fail and return nothing. Color and
//! sound tokens are opaque to the core; they originate in behavior profiles
//! and pass straight through to the host's renderer and mixer.

use crate::math::Vec2;

/// Opaque packed RGBA color token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectColor(pub u32);

/// Opaque sound cue identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundId(pub u16);

/// Color/sound theme carried by maneuver specs and passed through opaquely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectTheme {
    pub primary: EffectColor,
    pub secondary: EffectColor,
    pub sound: SoundId,
}

impl EffectTheme {
    /// Neutral white theme with cue 0; placeholder for tests.
    pub const PLAIN: Self = Self {
        primary: EffectColor(0xffffffff),
        secondary: EffectColor(0x808080ff),
        sound: SoundId(0),
    };
}

/// One-way effect request surface.
///
/// Implementations forward to particle, audio, and camera systems. None of
/// these calls fails observably to the core.
pub trait EffectSink {
    /// Particle burst, e.g. at a teleport departure or arrival point.
    fn burst_vfx(&mut self, position: Vec2, color_a: EffectColor, color_b: EffectColor, departure: bool);

    /// Expanding ring, e.g. a telegraph or punishment warning.
    fn ring_vfx(&mut self, position: Vec2, color: EffectColor, scale: f32, lifetime_ticks: u32);

    /// Motion trail segment emitted periodically during dashes.
    fn trail_vfx(&mut self, position: Vec2, velocity: Vec2, color: EffectColor);

    /// Positional sound cue.
    fn play_sound(&mut self, sound: SoundId, pitch_shift: f32, volume: f32, position: Vec2);

    /// Camera shake request.
    fn screen_shake(&mut self, magnitude: f32);
}

/// Sink that discards every request. Useful for headless simulation and for
/// tests that only care about state changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullEffects;

impl EffectSink for NullEffects {
    fn burst_vfx(&mut self, _: Vec2, _: EffectColor, _: EffectColor, _: bool) {}
    fn ring_vfx(&mut self, _: Vec2, _: EffectColor, _: f32, _: u32) {}
    fn trail_vfx(&mut self, _: Vec2, _: Vec2, _: EffectColor) {}
    fn play_sound(&mut self, _: SoundId, _: f32, _: f32, _: Vec2) {}
    fn screen_shake(&mut self, _: f32) {}
}
