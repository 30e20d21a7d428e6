//! Boss decision director.
//!
//! The director is the boss's "brain": once per tick it weighs the
//! situation and calls into the core's exposed interface. All decisions
//! flow through [`BossDirector::think`] in priority order:
//!
//! Priority 1: Punish evasive play (escalating response on rising edge)
//! Priority 2: Busy? → just advance the running maneuver/combo
//! Priority 3: Re-engage from range via the weighted attack roster
//! Priority 4: On-beat combo starts, gated by phrase intensity
//! Default:    Chase, with pace scaled by distance aggression

use combat_content::BossProfile;
use combat_core::{
    CombatAgent, CombatEngine, CombatTuning, EnvContext, Facing, PunishmentLevel, TargetSnapshot,
    aggression::{aggression_multiplier, check_punishment, execute_punishment},
    maneuver::should_teleport,
    rhythm::{is_on_beat, musical_intensity},
    selector::select_weighted,
};

/// Ticks of decision hold after committing to an action.
const DECISION_COOLDOWN: u32 = 45;

/// Base probability of starting a combo on an on-beat decision tick,
/// before phrase-intensity scaling.
const COMBO_CHANCE: f32 = 0.6;

/// Per-agent decision state driving one boss.
pub struct BossDirector {
    profile: BossProfile,
    /// Ticks since this director took over the agent.
    clock: u64,
    /// Remaining decision hold.
    cooldown: u32,
    /// Roster index of the last maneuver started, for repeat avoidance.
    last_roster: Option<usize>,
    /// Combo index of the last combo started, for repeat avoidance.
    last_combo: Option<usize>,
    /// Highest punishment level already executed on the current offense.
    executed_level: PunishmentLevel,
}

impl BossDirector {
    pub fn new(profile: BossProfile) -> Self {
        Self {
            profile,
            clock: 0,
            cooldown: 0,
            last_roster: None,
            last_combo: None,
            executed_level: PunishmentLevel::None,
        }
    }

    pub fn profile(&self) -> &BossProfile {
        &self.profile
    }

    /// Runs one decision-and-advance tick for `agent`.
    pub fn think(
        &mut self,
        agent: &mut CombatAgent,
        target: &TargetSnapshot,
        tuning: &CombatTuning,
        env: &mut EnvContext<'_>,
    ) {
        self.clock += 1;
        let distance = agent.distance_to(target.position);
        let target_speed = target.speed();

        // ====================================================================
        // Priority 1: Punish evasive play
        // ====================================================================

        let level = check_punishment(distance, target_speed, &mut agent.tracker, tuning);
        if level == PunishmentLevel::None {
            self.executed_level = PunishmentLevel::None;
        } else if level > self.executed_level {
            tracing::debug!(
                "BossDirector: agent={:?} punishing at {} (distance={:.0}, target_speed={:.2})",
                agent.id,
                level,
                distance,
                target_speed
            );
            if level >= PunishmentLevel::Moderate {
                // The punishment teleport supersedes whatever was running
                CombatEngine::new(agent, tuning).reset();
                self.cooldown = DECISION_COOLDOWN;
            }
            execute_punishment(level, agent, target, tuning, self.profile.theme, env);
            self.executed_level = level;
        }

        // ====================================================================
        // Priority 2: A busy agent just advances
        // ====================================================================

        if agent.maneuver.is_some() || agent.combo.is_active() {
            CombatEngine::new(agent, tuning).tick(env, target);
            return;
        }

        if self.cooldown > 0 {
            self.cooldown -= 1;
        } else if should_teleport(agent, target, self.profile.teleport_threshold) {
            // ================================================================
            // Priority 3: Re-engage from range via the attack roster
            // ================================================================
            self.start_roster_maneuver(agent, target, tuning, env);
            self.cooldown = DECISION_COOLDOWN;
            return;
        } else if is_on_beat(self.clock, self.profile.beat.bpm, self.profile.beat.subdivision) {
            // ================================================================
            // Priority 4: On-beat combo starts, gated by phrase intensity
            // ================================================================
            let intensity = musical_intensity(self.clock, self.profile.beat.phrase_ticks);
            if env.rng.chance(COMBO_CHANCE * intensity) && self.start_combo(agent, tuning, env) {
                self.cooldown = DECISION_COOLDOWN;
                return;
            }
        }

        // ====================================================================
        // Default: Chase, pace scaled by distance aggression
        // ====================================================================

        let pace = self.profile.chase_speed * aggression_multiplier(distance);
        let dir = (target.position - agent.position).normalized_or_zero();
        agent.velocity = dir * pace;
        agent.facing = Facing::toward(dir.x);
        CombatEngine::new(agent, tuning).tick(env, target);
    }

    fn start_roster_maneuver(
        &mut self,
        agent: &mut CombatAgent,
        target: &TargetSnapshot,
        tuning: &CombatTuning,
        env: &mut EnvContext<'_>,
    ) {
        let candidates: Vec<(usize, f32)> = self
            .profile
            .roster
            .iter()
            .enumerate()
            .map(|(i, entry)| (i, entry.weight))
            .collect();
        let Some(index) = select_weighted(&candidates, self.last_roster, env.rng) else {
            return;
        };
        let entry = &self.profile.roster[index];
        tracing::debug!(
            "BossDirector: agent={:?} → maneuver {} (roster #{index})",
            agent.id,
            entry.maneuver.kind()
        );
        if CombatEngine::new(agent, tuning).start_maneuver(env, target, entry.maneuver) {
            self.last_roster = Some(index);
        }
    }

    fn start_combo(
        &mut self,
        agent: &mut CombatAgent,
        tuning: &CombatTuning,
        env: &mut EnvContext<'_>,
    ) -> bool {
        let candidates: Vec<(usize, f32)> = self
            .profile
            .combos
            .iter()
            .enumerate()
            .map(|(i, combo)| (i, combo.weight))
            .collect();
        // Combo choice rides the same authoritative stream as everything
        // else; a dedicated scratch rng here would desynchronize peers.
        let Some(index) = select_weighted(&candidates, self.last_combo, env.rng) else {
            return false;
        };
        let combo = &self.profile.combos[index];
        // Validated at load time; a combo that still fails is skipped
        let Ok(definition) = combo.definition() else {
            return false;
        };
        tracing::debug!(
            "BossDirector: agent={:?} → combo '{}' ({} steps)",
            agent.id,
            combo.name,
            definition.len()
        );
        if CombatEngine::new(agent, tuning).start_combo(&definition) {
            self.last_combo = Some(index);
            true
        } else {
            false
        }
    }
}
