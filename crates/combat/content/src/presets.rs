//! Built-in behavior profiles for the shipped bosses.
//!
//! Presets are plain constructors so hosts without a content directory can
//! still spawn a fully tuned boss; the RON loader produces the same type.

use combat_core::{
    ChainDashSpec, ComboStep, EffectColor, EffectTheme, ManeuverCommand, ProjectileKind, SoundId,
    StepKind, TeleportDashSpec, TeleportSpec,
};

use crate::profile::{BeatSettings, BossProfile, NamedCombo, RosterEntry};

/// Bolt projectile from the host's projectile table.
const BOLT: ProjectileKind = ProjectileKind(3);

/// The revenant: a teleport-heavy duelist that punishes keep-away play.
pub fn revenant() -> BossProfile {
    let theme = EffectTheme {
        primary: EffectColor(0x8a2be2ff),
        secondary: EffectColor(0x3c1361ff),
        sound: SoundId(11),
    };

    BossProfile {
        name: "revenant".into(),
        theme,
        teleport_threshold: 420.0,
        chase_speed: 3.2,
        beat: BeatSettings {
            bpm: 120.0,
            subdivision: 1.0,
            phrase_ticks: 600,
        },
        roster: vec![
            RosterEntry {
                maneuver: ManeuverCommand::AggressiveTeleport(TeleportSpec {
                    arrival_distance: 170.0,
                    spawn_decoy: true,
                    theme,
                }),
                weight: 2.0,
            },
            RosterEntry {
                maneuver: ManeuverCommand::ChainDash(ChainDashSpec {
                    max_dashes: 3,
                    dash_speed: 14.0,
                    dash_duration: 20,
                    predict_movement: true,
                    lookahead_ticks: 12.0,
                    flank_distance: 90.0,
                    theme,
                }),
                weight: 3.0,
            },
            RosterEntry {
                maneuver: ManeuverCommand::TeleportDash(TeleportDashSpec {
                    teleport_distance: 230.0,
                    hover_height: 130.0,
                    dash_speed: 17.0,
                    pause_ticks: 18,
                    dash_ticks: 22,
                    theme,
                }),
                weight: 2.0,
            },
        ],
        combos: vec![
            NamedCombo {
                name: "crescent rush".into(),
                weight: 3.0,
                steps: vec![
                    ComboStep::new(
                        StepKind::Telegraph {
                            color: theme.secondary,
                            sound: theme.sound,
                        },
                        24,
                    ),
                    ComboStep::new(StepKind::DashToward { speed: 12.0 }, 30),
                    ComboStep::new(StepKind::Brake { factor: 0.85 }, 12),
                ],
            },
            NamedCombo {
                name: "spiral barrage".into(),
                weight: 2.0,
                steps: vec![
                    ComboStep::new(
                        StepKind::Hover {
                            height: 140.0,
                            speed: 5.0,
                        },
                        36,
                    ),
                    ComboStep::new(
                        StepKind::ProjectileRing {
                            kind: BOLT,
                            count: 10,
                            speed: 5.5,
                            damage: 16.0,
                            knockback: 3.0,
                        },
                        8,
                    ),
                    ComboStep::new(
                        StepKind::VolleyAtTarget {
                            kind: BOLT,
                            interval: 9,
                            speed: 8.0,
                            damage: 12.0,
                            knockback: 2.0,
                        },
                        45,
                    ),
                    ComboStep::new(StepKind::Brake { factor: 0.9 }, 10),
                ],
            },
        ],
    }
}
