//! Round Resolution
//!
//! Runs one round: picks the acting order, plays each turn as
//! perceive -> decide -> act, and stops as soon as an agent is defeated.

use battle_events::{RoundRecord, Slot, TurnRecord, Victory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::agent::Agent;
use crate::rng::RandomSource;

/// How the acting order is chosen each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOrder {
    /// First slot always acts first
    #[default]
    Fixed,
    /// Coin flip before each round
    Randomized,
}

impl fmt::Display for TurnOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnOrder::Fixed => write!(f, "fixed"),
            TurnOrder::Randomized => write!(f, "randomized"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown turn order '{0}' (expected 'fixed' or 'randomized')")]
pub struct ParseTurnOrderError(String);

impl FromStr for TurnOrder {
    type Err = ParseTurnOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(TurnOrder::Fixed),
            "randomized" | "random" => Ok(TurnOrder::Randomized),
            other => Err(ParseTurnOrderError(other.to_string())),
        }
    }
}

/// Resolution settings shared by every round of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolverOptions {
    pub turn_order: TurnOrder,
    /// Log each turn's perception and decision before its action line
    pub narrate_reasoning: bool,
}

/// Lines and record produced by one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Contiguous log block, header first
    pub lines: Vec<String>,
    pub record: RoundRecord,
}

impl RoundOutcome {
    pub fn battle_over(&self) -> bool {
        self.record.ended_battle()
    }
}

/// Header line opening each round's log block.
pub fn round_header(round: u32) -> String {
    format!("--- Round {} ---", round)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoundResolver {
    options: ResolverOptions,
}

impl RoundResolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolve a full round between the two seated agents.
    pub fn resolve<R: RandomSource>(
        &self,
        round: u32,
        first: &mut Agent,
        second: &mut Agent,
        rng: &mut R,
    ) -> RoundOutcome {
        let opener = match self.options.turn_order {
            TurnOrder::Fixed => Slot::First,
            TurnOrder::Randomized => *rng.choose(&[Slot::First, Slot::Second]),
        };

        let mut lines = vec![round_header(round)];
        let mut record = RoundRecord::new(round, opener);

        if self.options.turn_order == TurnOrder::Randomized {
            let (actor, _) = seats(opener, first, second);
            lines.push(format!("{} acts first.", actor.name()));
        }

        for slot in [opener, opener.opposite()] {
            let (actor, opponent) = seats(slot, first, second);
            let turn = self.take_turn(slot, actor, opponent, rng, &mut lines);
            record.turns.push(turn);

            if opponent.is_defeated() {
                let victory = Victory {
                    winner: slot,
                    winner_name: actor.name().to_string(),
                    loser_name: opponent.name().to_string(),
                };
                lines.push(victory.defeat_line());
                record.victory = Some(victory);
                break;
            }
        }

        RoundOutcome { lines, record }
    }

    fn take_turn<R: RandomSource>(
        &self,
        slot: Slot,
        actor: &mut Agent,
        opponent: &mut Agent,
        rng: &mut R,
        lines: &mut Vec<String>,
    ) -> TurnRecord {
        let perception = actor.perceive(opponent, rng);
        let action = actor.decide(&perception, rng);

        if self.options.narrate_reasoning {
            lines.push(format!(
                "{} perceives: {}, event: {}",
                actor.name(),
                perception.threat_level,
                perception.random_event
            ));
            lines.push(format!("{} decides: {}", actor.name(), action));
        }

        let effect = actor.act(action, opponent, rng);
        lines.push(effect.line);

        debug!(
            actor = %actor.name(),
            %action,
            amount = ?effect.amount,
            opponent_health = opponent.health(),
            "turn resolved"
        );

        TurnRecord {
            actor: slot,
            actor_name: actor.name().to_string(),
            target_name: opponent.name().to_string(),
            perception,
            action,
            amount: effect.amount,
            actor_health: actor.health(),
            target_health: opponent.health(),
        }
    }
}

/// Split the two seats into (actor, opponent) for the given slot.
fn seats<'a>(slot: Slot, first: &'a mut Agent, second: &'a mut Agent) -> (&'a mut Agent, &'a mut Agent) {
    match slot {
        Slot::First => (first, second),
        Slot::Second => (second, first),
    }
}
