//! Decision Policy
//!
//! Fixed rule set mapping a perception and the deciding agent's health to an
//! action. Rules are checked in order and the first match wins:
//!
//! 1. No threat: celebrate.
//! 2. Heal event while health is below [`HEAL_THRESHOLD`]: heal.
//! 3. Boost event: attack.
//! 4. Otherwise a coin flip between attack and defend.
//!
//! The coin flip is returned unresolved so the policy itself stays pure.

use battle_events::{Action, Perception, RandomEvent, ThreatLevel};

/// Health below which a heal event triggers healing
pub const HEAL_THRESHOLD: i32 = 15;

/// Options for the final coin flip, in pick order.
pub const FALLBACK_CHOICES: [Action; 2] = [Action::Attack, Action::Defend];

/// Result of evaluating the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyOutcome {
    /// A rule matched outright
    Decided(Action),
    /// No rule matched; pick uniformly between the two
    CoinFlip([Action; 2]),
}

impl PolicyOutcome {
    /// Every action this outcome could produce.
    pub fn candidates(&self) -> &[Action] {
        match self {
            PolicyOutcome::Decided(action) => std::slice::from_ref(action),
            PolicyOutcome::CoinFlip(choices) => choices,
        }
    }
}

/// Evaluate the rule set.
pub fn evaluate(perception: &Perception, health: i32) -> PolicyOutcome {
    if perception.threat_level == ThreatLevel::NoThreat {
        return PolicyOutcome::Decided(Action::Celebrate);
    }

    match perception.random_event {
        RandomEvent::Heal if health < HEAL_THRESHOLD => PolicyOutcome::Decided(Action::Heal),
        RandomEvent::Boost => PolicyOutcome::Decided(Action::Attack),
        RandomEvent::Heal | RandomEvent::Nothing => PolicyOutcome::CoinFlip(FALLBACK_CHOICES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perceive(threat_level: ThreatLevel, random_event: RandomEvent) -> Perception {
        Perception::new(threat_level, random_event)
    }

    #[test]
    fn test_no_threat_always_celebrates() {
        for event in RandomEvent::ALL {
            for health in [-5, 0, 1, 10, 14, 15, 30, 100] {
                let outcome = evaluate(&perceive(ThreatLevel::NoThreat, event), health);
                assert_eq!(outcome, PolicyOutcome::Decided(Action::Celebrate));
            }
        }
    }

    #[test]
    fn test_heal_event_at_low_health_heals() {
        let outcome = evaluate(&perceive(ThreatLevel::Threat, RandomEvent::Heal), 10);
        assert_eq!(outcome, PolicyOutcome::Decided(Action::Heal));
    }

    #[test]
    fn test_heal_threshold_is_exclusive() {
        let at_threshold = evaluate(&perceive(ThreatLevel::Threat, RandomEvent::Heal), HEAL_THRESHOLD);
        assert_eq!(at_threshold, PolicyOutcome::CoinFlip(FALLBACK_CHOICES));

        let below = evaluate(&perceive(ThreatLevel::Threat, RandomEvent::Heal), HEAL_THRESHOLD - 1);
        assert_eq!(below, PolicyOutcome::Decided(Action::Heal));
    }

    #[test]
    fn test_boost_attacks_at_any_health() {
        for health in [1, 5, 14, 30] {
            let outcome = evaluate(&perceive(ThreatLevel::Threat, RandomEvent::Boost), health);
            assert_eq!(outcome, PolicyOutcome::Decided(Action::Attack));
        }
    }

    #[test]
    fn test_nothing_event_flips_between_attack_and_defend() {
        let outcome = evaluate(&perceive(ThreatLevel::Threat, RandomEvent::Nothing), 30);
        assert_eq!(outcome.candidates(), &[Action::Attack, Action::Defend]);
    }

    #[test]
    fn test_policy_never_waits() {
        for threat in [ThreatLevel::Threat, ThreatLevel::NoThreat] {
            for event in RandomEvent::ALL {
                for health in -10..40 {
                    let outcome = evaluate(&perceive(threat, event), health);
                    assert!(!outcome.candidates().contains(&Action::Wait));
                }
            }
        }
    }
}
