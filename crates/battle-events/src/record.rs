//! Round Records
//!
//! Structured history of a battle, kept alongside the textual log so a
//! presentation layer can lay out turns per side without parsing strings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Action, Perception};

/// Seat of an agent within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// The other seat.
    pub fn opposite(self) -> Self {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::First => write!(f, "first"),
            Slot::Second => write!(f, "second"),
        }
    }
}

/// One agent's perceive -> decide -> act sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub actor: Slot,
    pub actor_name: String,
    pub target_name: String,
    pub perception: Perception,
    pub action: Action,
    /// Damage dealt or health restored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
    pub actor_health: i32,
    pub target_health: i32,
}

/// Outcome line of the turn that ended the battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victory {
    pub winner: Slot,
    pub winner_name: String,
    pub loser_name: String,
}

impl Victory {
    /// English defeat line as written to the session log.
    pub fn defeat_line(&self) -> String {
        format!("{} is defeated! {} wins!", self.loser_name, self.winner_name)
    }
}

/// All turns resolved in a single round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub first_actor: Slot,
    pub turns: Vec<TurnRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub victory: Option<Victory>,
}

impl RoundRecord {
    pub fn new(round: u32, first_actor: Slot) -> Self {
        Self {
            round,
            first_actor,
            turns: Vec::new(),
            victory: None,
        }
    }

    /// Returns true if this round ended the battle.
    pub fn ended_battle(&self) -> bool {
        self.victory.is_some()
    }

    /// Turns taken by the agent in the given seat.
    pub fn turns_by(&self, slot: Slot) -> impl Iterator<Item = &TurnRecord> {
        self.turns.iter().filter(move |t| t.actor == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RandomEvent, ThreatLevel};

    fn turn(actor: Slot, action: Action) -> TurnRecord {
        TurnRecord {
            actor,
            actor_name: "Thor".to_string(),
            target_name: "Loki".to_string(),
            perception: Perception::new(ThreatLevel::Threat, RandomEvent::Nothing),
            action,
            amount: None,
            actor_health: 30,
            target_health: 30,
        }
    }

    #[test]
    fn test_slot_opposite() {
        assert_eq!(Slot::First.opposite(), Slot::Second);
        assert_eq!(Slot::Second.opposite().opposite(), Slot::Second);
    }

    #[test]
    fn test_turns_by_slot() {
        let mut round = RoundRecord::new(3, Slot::Second);
        round.turns.push(turn(Slot::Second, Action::Defend));
        round.turns.push(turn(Slot::First, Action::Attack));

        assert_eq!(round.turns_by(Slot::First).count(), 1);
        assert_eq!(round.turns_by(Slot::Second).next().unwrap().action, Action::Defend);
        assert!(!round.ended_battle());
    }

    #[test]
    fn test_defeat_line() {
        let victory = Victory {
            winner: Slot::First,
            winner_name: "Thor".to_string(),
            loser_name: "Loki".to_string(),
        };
        assert_eq!(victory.defeat_line(), "Loki is defeated! Thor wins!");
    }

    #[test]
    fn test_amount_omitted_when_absent() {
        let json = serde_json::to_string(&turn(Slot::First, Action::Defend)).unwrap();
        assert!(!json.contains("amount"));
        assert!(json.contains(r#""actor":"first""#));
    }
}
