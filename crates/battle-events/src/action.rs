//! Action Types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Action chosen by the decision policy and applied by the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Damage the opponent
    Attack,
    /// Brace; no health change
    Defend,
    /// Restore own health, uncapped
    Heal,
    /// Opponent is down
    Celebrate,
    /// Fallback; never chosen by the current policy
    Wait,
}

impl Action {
    /// Returns all action variants.
    pub fn all() -> &'static [Action] {
        &[
            Action::Attack,
            Action::Defend,
            Action::Heal,
            Action::Celebrate,
            Action::Wait,
        ]
    }

    /// True for actions that roll an amount.
    pub fn rolls_amount(&self) -> bool {
        matches!(self, Action::Attack | Action::Heal)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Attack => write!(f, "attack"),
            Action::Defend => write!(f, "defend"),
            Action::Heal => write!(f, "heal"),
            Action::Celebrate => write!(f, "celebrate"),
            Action::Wait => write!(f, "wait"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolls_amount() {
        let rolling: Vec<_> = Action::all().iter().filter(|a| a.rolls_amount()).collect();
        assert_eq!(rolling, vec![&Action::Attack, &Action::Heal]);
    }

    #[test]
    fn test_action_serialization() {
        assert_eq!(serde_json::to_string(&Action::Celebrate).unwrap(), r#""celebrate""#);
        let parsed: Action = serde_json::from_str(r#""wait""#).unwrap();
        assert_eq!(parsed, Action::Wait);
    }
}
