//! Effect event recording.
//!
//! The core fires effect requests into sink traits and forgets them. The
//! recording sinks here turn those calls into event values a host drains
//! once per frame to drive particles, audio, and camera — and the
//! observation point integration tests assert against.

use combat_core::{
    EffectColor, EffectSink, ProjectileHandle, ProjectileKind, ProjectileSpawner, SoundId, Vec2,
};

/// One recorded effect request. Serializable so hosts can persist frame
/// logs for replay analysis.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum EffectEvent {
    Burst {
        position: Vec2,
        color_a: EffectColor,
        color_b: EffectColor,
        departure: bool,
    },
    Ring {
        position: Vec2,
        color: EffectColor,
        scale: f32,
        lifetime_ticks: u32,
    },
    Trail {
        position: Vec2,
        velocity: Vec2,
        color: EffectColor,
    },
    Sound {
        sound: SoundId,
        pitch_shift: f32,
        volume: f32,
        position: Vec2,
    },
    ScreenShake {
        magnitude: f32,
    },
}

/// One recorded projectile spawn request.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectileEvent {
    pub origin: Vec2,
    pub velocity: Vec2,
    pub kind: ProjectileKind,
    pub damage: f32,
    pub knockback: f32,
}

/// Effect sink that appends every request to an event log.
#[derive(Debug, Default)]
pub struct RecordingEffects {
    events: Vec<EffectEvent>,
}

impl RecordingEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all recorded events.
    pub fn drain(&mut self) -> Vec<EffectEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[EffectEvent] {
        &self.events
    }

    /// Count of recorded screen shakes; severe punishments are the only
    /// source, which makes this a convenient test probe.
    pub fn shake_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, EffectEvent::ScreenShake { .. }))
            .count()
    }
}

impl EffectSink for RecordingEffects {
    fn burst_vfx(&mut self, position: Vec2, color_a: EffectColor, color_b: EffectColor, departure: bool) {
        self.events.push(EffectEvent::Burst {
            position,
            color_a,
            color_b,
            departure,
        });
    }

    fn ring_vfx(&mut self, position: Vec2, color: EffectColor, scale: f32, lifetime_ticks: u32) {
        self.events.push(EffectEvent::Ring {
            position,
            color,
            scale,
            lifetime_ticks,
        });
    }

    fn trail_vfx(&mut self, position: Vec2, velocity: Vec2, color: EffectColor) {
        self.events.push(EffectEvent::Trail {
            position,
            velocity,
            color,
        });
    }

    fn play_sound(&mut self, sound: SoundId, pitch_shift: f32, volume: f32, position: Vec2) {
        self.events.push(EffectEvent::Sound {
            sound,
            pitch_shift,
            volume,
            position,
        });
    }

    fn screen_shake(&mut self, magnitude: f32) {
        self.events.push(EffectEvent::ScreenShake { magnitude });
    }
}

/// Projectile spawner that records requests and hands back sequential
/// handles.
#[derive(Debug, Default)]
pub struct RecordingProjectiles {
    spawns: Vec<ProjectileEvent>,
    next_handle: u32,
}

impl RecordingProjectiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<ProjectileEvent> {
        std::mem::take(&mut self.spawns)
    }

    pub fn spawns(&self) -> &[ProjectileEvent] {
        &self.spawns
    }
}

impl ProjectileSpawner for RecordingProjectiles {
    fn spawn(
        &mut self,
        origin: Vec2,
        velocity: Vec2,
        kind: ProjectileKind,
        damage: f32,
        knockback: f32,
    ) -> ProjectileHandle {
        self.spawns.push(ProjectileEvent {
            origin,
            velocity,
            kind,
            damage,
            knockback,
        });
        let handle = ProjectileHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        handle
    }
}
