//! Combat tuning parameters.
//!
//! All escalation thresholds and decay rates live in one plain table so
//! hosts can load balance overrides without touching core logic. Defaults
//! are the shipped boss balance.

/// Tuning table for distance aggression and cheese punishment.
///
/// Owned by the host and passed by reference into the detector functions in
/// [`crate::aggression`]; the core never mutates it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatTuning {
    /// Distance beyond which the target is considered to be cheesing from
    /// range; the far-away timer rises while this holds.
    pub far_threshold: f32,

    /// Target speed below which the target counts as stationary (camping).
    pub stationary_speed_threshold: f32,

    /// Far-away timer decay per tick while the target is within range.
    pub far_decay: u32,

    /// Stationary timer decay per tick while the target is moving.
    pub stationary_decay: u32,

    /// Far-away timer values above which punishment levels 1/2/3 fire.
    pub far_levels: [u32; 3],

    /// Stationary timer values above which punishment levels 1/2/3 fire.
    pub stationary_levels: [u32; 3],

    /// Arrival distance for the level-2 punishment teleport.
    pub punish_teleport_distance: f32,

    /// Arrival distance for the level-3 punishment teleport.
    pub punish_close_distance: f32,

    /// Projectile count of the moderate (level-2) punishment ring.
    pub punish_ring_moderate: u32,

    /// Projectile count of the heavy (level-3) punishment ring.
    pub punish_ring_heavy: u32,

    /// Mirages spawned in the level-3 punishment formation.
    pub punish_mirage_count: u32,

    /// Lifetime in ticks of decoy mirages left behind by teleports.
    pub decoy_lifetime: u32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            far_threshold: 900.0,
            stationary_speed_threshold: 0.5,
            far_decay: 2,
            stationary_decay: 3,
            far_levels: [30, 60, 120],
            stationary_levels: [60, 120, 180],
            punish_teleport_distance: 260.0,
            punish_close_distance: 140.0,
            punish_ring_moderate: 8,
            punish_ring_heavy: 16,
            punish_mirage_count: 3,
            decoy_lifetime: 45,
        }
    }
}
