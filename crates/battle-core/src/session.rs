//! Battle Session
//!
//! Owns both agents, the round counter, the terminal flag and the log.
//! Presentation code drives it one round at a time through [`BattleSession::advance`]
//! and reads state back through the accessors or a [`SessionSnapshot`].

use battle_events::{RoundRecord, SessionSnapshot, Slot};
use tracing::{debug, info};

use crate::agent::{combat, Agent};
use crate::config::BattleConfig;
use crate::resolver::{ResolverOptions, RoundResolver};
use crate::rng::{RandomSource, SimRng};

/// Notice appended when advancing a finished battle.
pub const ALREADY_OVER: &str = "The battle is already over!";

/// A two-agent battle, driven one round at a time.
#[derive(Debug, Clone)]
pub struct BattleSession<R = SimRng> {
    first: Agent,
    second: Agent,
    resolver: RoundResolver,
    rng: R,
    round_number: u32,
    battle_over: bool,
    log: Vec<String>,
    rounds: Vec<RoundRecord>,
}

impl BattleSession<SimRng> {
    /// Build a session from configuration, seeded if the config names a seed.
    pub fn from_config(config: &BattleConfig) -> Self {
        let rng = match config.resolution.seed {
            Some(seed) => SimRng::seeded(seed),
            None => SimRng::from_entropy(),
        };
        Self::new(
            config.first.to_agent(),
            config.second.to_agent(),
            config.resolution.options(),
            rng,
        )
    }
}

impl<R: RandomSource> BattleSession<R> {
    pub fn new(first: Agent, second: Agent, options: ResolverOptions, rng: R) -> Self {
        Self {
            first,
            second,
            resolver: RoundResolver::new(options),
            rng,
            round_number: 1,
            battle_over: false,
            log: Vec::new(),
            rounds: Vec::new(),
        }
    }

    /// Two agents with the same starting health and default options.
    pub fn with_names(
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        initial_health: i32,
        rng: R,
    ) -> Self {
        Self::new(
            Agent::new(first_name, initial_health),
            Agent::new(second_name, initial_health),
            ResolverOptions::default(),
            rng,
        )
    }

    /// Two agents at [`combat::DEFAULT_HEALTH`].
    pub fn with_default_health(first_name: impl Into<String>, second_name: impl Into<String>, rng: R) -> Self {
        Self::with_names(first_name, second_name, combat::DEFAULT_HEALTH, rng)
    }

    /// Run one round, or append a notice if the battle has ended.
    pub fn advance(&mut self) {
        if self.battle_over {
            debug!(round = self.round_number, "advance called on finished battle");
            self.log.push(ALREADY_OVER.to_string());
            return;
        }

        let outcome = self
            .resolver
            .resolve(self.round_number, &mut self.first, &mut self.second, &mut self.rng);

        if let Some(victory) = &outcome.record.victory {
            info!(
                winner = %victory.winner_name,
                loser = %victory.loser_name,
                round = self.round_number,
                "battle over"
            );
            self.battle_over = true;
        }

        self.round_number += 1;
        self.log.extend(outcome.lines);
        self.rounds.push(outcome.record);
    }

    /// Advance until the battle ends or `max_rounds` rounds have been fought.
    /// Returns the number of rounds fought by this call.
    pub fn run_to_completion(&mut self, max_rounds: u32) -> u32 {
        let mut fought = 0;
        while !self.battle_over && fought < max_rounds {
            self.advance();
            fought += 1;
        }
        fought
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn battle_over(&self) -> bool {
        self.battle_over
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Last `n` log lines, oldest first.
    pub fn recent_log(&self, n: usize) -> &[String] {
        let start = self.log.len().saturating_sub(n);
        &self.log[start..]
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    pub fn agent(&self, slot: Slot) -> &Agent {
        match slot {
            Slot::First => &self.first,
            Slot::Second => &self.second,
        }
    }

    pub fn first(&self) -> &Agent {
        &self.first
    }

    pub fn second(&self) -> &Agent {
        &self.second
    }

    pub fn options(&self) -> &ResolverOptions {
        self.resolver.options()
    }

    /// Name of the winner, once the battle is over.
    pub fn winner(&self) -> Option<&str> {
        self.rounds
            .last()
            .and_then(|round| round.victory.as_ref())
            .map(|victory| self.agent(victory.winner).name())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            round_number: self.round_number,
            battle_over: self.battle_over,
            first: self.first.snapshot(),
            second: self.second.snapshot(),
            winner: self.winner().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::TurnOrder;
    use crate::rng::ScriptedSource;

    const BOOST: usize = 1;
    const NOTHING: usize = 2;
    const DEFEND: usize = 1;

    #[test]
    fn test_new_session_state() {
        let session = BattleSession::with_default_health("Thor", "Loki", SimRng::seeded(1));

        assert_eq!(session.round_number(), 1);
        assert!(!session.battle_over());
        assert!(session.log().is_empty());
        assert_eq!(session.first().health(), 30);
        assert_eq!(session.agent(Slot::Second).name(), "Loki");
        assert!(session.winner().is_none());
    }

    #[test]
    fn test_advance_appends_round_block() {
        let rng = ScriptedSource::with_draws(&[BOOST, NOTHING, DEFEND], &[8]);
        let mut session = BattleSession::with_names("Thor", "Loki", 30, rng);

        session.advance();

        assert_eq!(session.round_number(), 2);
        assert_eq!(
            session.log(),
            &["--- Round 1 ---", "Thor attacks Loki for 8 damage!", "Loki defends!"]
        );
        assert_eq!(session.second().health(), 22);
        assert_eq!(session.rounds().len(), 1);
    }

    #[test]
    fn test_advance_after_end_only_appends_notice() {
        let rng = ScriptedSource::with_draws(&[BOOST], &[10]);
        let mut session = BattleSession::new(
            Agent::new("Thor", 30),
            Agent::new("Loki", 6),
            ResolverOptions::default(),
            rng,
        );

        session.advance();
        assert!(session.battle_over());
        assert_eq!(session.round_number(), 2);
        assert_eq!(session.winner(), Some("Thor"));

        let log_len = session.log().len();
        session.advance();
        session.advance();

        assert_eq!(session.round_number(), 2);
        assert_eq!(session.second().health(), -4);
        assert_eq!(session.first().health(), 30);
        assert_eq!(session.log().len(), log_len + 2);
        assert_eq!(session.recent_log(1), &[ALREADY_OVER]);
        assert_eq!(session.rounds().len(), 1);
    }

    #[test]
    fn test_recent_log_handles_short_logs() {
        let mut session = BattleSession::with_default_health("Thor", "Loki", SimRng::seeded(5));
        assert!(session.recent_log(4).is_empty());

        session.advance();
        let all = session.log().to_vec();
        assert_eq!(session.recent_log(100), all.as_slice());
        assert_eq!(session.recent_log(1), &all[all.len() - 1..]);
    }

    #[test]
    fn test_run_to_completion_respects_cap() {
        // Both sides defend forever.
        let picks: Vec<usize> = std::iter::repeat([NOTHING, DEFEND]).take(20).flatten().collect();
        let rng = ScriptedSource::with_draws(&picks, &[]);
        let mut session = BattleSession::with_names("Thor", "Loki", 30, rng);

        let fought = session.run_to_completion(5);

        assert_eq!(fought, 5);
        assert_eq!(session.round_number(), 6);
        assert!(!session.battle_over());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let rng = ScriptedSource::with_draws(&[BOOST], &[9]);
        let mut session = BattleSession::new(
            Agent::new("Maccabees", 30).with_leader("Mattathias"),
            Agent::new("Romans", 9).with_leader("Antiochus"),
            ResolverOptions {
                turn_order: TurnOrder::Fixed,
                narrate_reasoning: false,
            },
            rng,
        );
        session.advance();

        let snapshot = session.snapshot();
        assert!(snapshot.battle_over);
        assert_eq!(snapshot.rounds_fought(), 1);
        assert_eq!(snapshot.winner.as_deref(), Some("Maccabees"));
        assert_eq!(snapshot.second.health, 0);
        assert!(!snapshot.second.alive);
        assert_eq!(snapshot.first.leader.as_deref(), Some("Mattathias"));
    }

    #[test]
    fn test_from_config_uses_seed_and_names() {
        let mut config = BattleConfig::default();
        config.first.name = "Ares".to_string();
        config.second.health = 12;
        config.resolution.seed = Some(11);

        let mut a = BattleSession::from_config(&config);
        let mut b = BattleSession::from_config(&config);
        assert_eq!(a.first().name(), "Ares");
        assert_eq!(a.second().initial_health(), 12);

        a.run_to_completion(100);
        b.run_to_completion(100);
        assert_eq!(a.log(), b.log());
    }
}
