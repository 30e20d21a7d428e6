//! Boss profile loader.

use std::path::Path;

use anyhow::Context;

use crate::loaders::{LoadResult, read_file};
use crate::profile::BossProfile;

/// Loader for boss behavior profiles from RON files.
pub struct ProfileLoader;

impl ProfileLoader {
    /// Load and validate a profile from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a BossProfile
    ///
    /// # Returns
    ///
    /// Returns a validated BossProfile.
    pub fn load(path: &Path) -> LoadResult<BossProfile> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in profile file {}", path.display()))
    }

    /// Parse and validate a profile from RON text.
    pub fn parse(content: &str) -> LoadResult<BossProfile> {
        let profile: BossProfile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile RON: {}", e))?;
        profile
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid combo in profile '{}': {}", profile.name, e))?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    #[test]
    fn preset_round_trips_through_ron() {
        let profile = presets::revenant();
        let text = ron::ser::to_string(&profile).unwrap();
        let reloaded = ProfileLoader::parse(&text).unwrap();
        assert_eq!(reloaded, profile);
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = ProfileLoader::parse("BossProfile(name:").unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn profile_with_empty_combo_is_rejected_on_load() {
        let mut profile = presets::revenant();
        profile.combos[0].steps.clear();
        let text = ron::ser::to_string(&profile).unwrap();
        let err = ProfileLoader::parse(&text).unwrap_err();
        assert!(err.to_string().contains("Invalid combo"));
    }
}
