//! Boss behavior profile definitions.

use combat_core::{ComboDefinition, ComboError, ComboStep, EffectTheme, ManeuverCommand};

/// Musical timing settings a boss fights to.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeatSettings {
    pub bpm: f32,
    pub subdivision: f32,
    /// Length of one intensity phrase in ticks.
    pub phrase_ticks: u64,
}

/// One weighted maneuver option in a boss's attack roster.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    pub maneuver: ManeuverCommand,
    pub weight: f32,
}

/// A weighted, named combo step list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedCombo {
    pub name: String,
    pub weight: f32,
    pub steps: Vec<ComboStep>,
}

impl NamedCombo {
    /// Validates the step list into a runnable definition.
    pub fn definition(&self) -> Result<ComboDefinition, ComboError> {
        ComboDefinition::new(self.steps.iter().copied())
    }
}

/// Complete behavior profile for one boss.
///
/// A profile is what the runtime's director needs to fight: when to engage
/// by teleport, which maneuvers and combos to pick from (and how often),
/// what rhythm to fight to, and the effect theme its visuals carry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossProfile {
    pub name: String,
    pub theme: EffectTheme,
    /// Distance beyond which the boss closes in by teleport.
    pub teleport_threshold: f32,
    /// Base chase speed in units per tick, before aggression scaling.
    pub chase_speed: f32,
    pub beat: BeatSettings,
    pub roster: Vec<RosterEntry>,
    pub combos: Vec<NamedCombo>,
}

impl BossProfile {
    /// Validates every combo in the profile, returning the first problem.
    pub fn validate(&self) -> Result<(), ComboError> {
        for combo in &self.combos {
            let _ = combo.definition()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::StepKind;

    #[test]
    fn empty_combo_fails_validation() {
        let mut profile = crate::presets::revenant();
        profile.combos.push(NamedCombo {
            name: "broken".into(),
            weight: 1.0,
            steps: Vec::new(),
        });
        assert_eq!(profile.validate(), Err(ComboError::Empty));
    }

    #[test]
    fn oversized_combo_fails_validation() {
        let mut profile = crate::presets::revenant();
        let step = ComboStep::new(StepKind::Brake { factor: 0.9 }, 5);
        profile.combos.push(NamedCombo {
            name: "bloated".into(),
            weight: 1.0,
            steps: vec![step; combat_core::MAX_COMBO_STEPS + 1],
        });
        assert!(matches!(
            profile.validate(),
            Err(ComboError::TooManySteps { .. })
        ));
    }
}
