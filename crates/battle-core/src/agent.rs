//! Agents
//!
//! A combatant that runs the perceive -> decide -> act cycle against a
//! single opponent.

use battle_events::{Action, AgentSnapshot, HealthBand, Perception, RandomEvent, ThreatLevel};
use tracing::trace;

use crate::policy::{self, PolicyOutcome};
use crate::rng::RandomSource;

/// Combat constants
pub mod combat {
    /// Starting health when none is configured
    pub const DEFAULT_HEALTH: i32 = 30;
    /// Minimum attack damage
    pub const DAMAGE_MIN: i32 = 5;
    /// Maximum attack damage
    pub const DAMAGE_MAX: i32 = 10;
    /// Minimum heal amount
    pub const HEAL_MIN: i32 = 5;
    /// Maximum heal amount (no health ceiling applies)
    pub const HEAL_MAX: i32 = 10;
}

/// Result of applying an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEffect {
    /// Log line describing the action
    pub line: String,
    /// Damage dealt or health restored
    pub amount: Option<i32>,
}

/// A combatant with a name and mutable health.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    name: String,
    leader: Option<String>,
    health: i32,
    initial_health: i32,
}

impl Agent {
    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Self {
            name: name.into(),
            leader: None,
            health,
            initial_health: health,
        }
    }

    /// Builder method to name the agent's commander
    pub fn with_leader(mut self, leader: impl Into<String>) -> Self {
        self.leader = Some(leader.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn leader(&self) -> Option<&str> {
        self.leader.as_deref()
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn initial_health(&self) -> i32 {
        self.initial_health
    }

    /// Defeated agents have health at or below zero.
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Observe the opponent and sample an environmental event.
    pub fn perceive<R: RandomSource>(&self, opponent: &Agent, rng: &mut R) -> Perception {
        let random_event = *rng.choose(&RandomEvent::ALL);
        Perception::new(ThreatLevel::from_opponent_health(opponent.health), random_event)
    }

    /// Apply the decision policy, resolving its coin flip if needed.
    pub fn decide<R: RandomSource>(&self, perception: &Perception, rng: &mut R) -> Action {
        match policy::evaluate(perception, self.health) {
            PolicyOutcome::Decided(action) => action,
            PolicyOutcome::CoinFlip(choices) => *rng.choose(&choices),
        }
    }

    /// Carry out an action against the opponent.
    pub fn act<R: RandomSource>(&mut self, action: Action, opponent: &mut Agent, rng: &mut R) -> ActionEffect {
        match action {
            Action::Attack => {
                let damage = rng.roll(combat::DAMAGE_MIN, combat::DAMAGE_MAX);
                opponent.health -= damage;
                trace!(attacker = %self.name, defender = %opponent.name, damage, "attack landed");
                ActionEffect {
                    line: format!("{} attacks {} for {} damage!", self.name, opponent.name, damage),
                    amount: Some(damage),
                }
            }
            Action::Defend => ActionEffect {
                line: format!("{} defends!", self.name),
                amount: None,
            },
            Action::Heal => {
                let amount = rng.roll(combat::HEAL_MIN, combat::HEAL_MAX);
                self.health += amount;
                ActionEffect {
                    line: format!("{} heals for {} HP!", self.name, amount),
                    amount: Some(amount),
                }
            }
            Action::Celebrate => ActionEffect {
                line: format!("{} celebrates (opponent down)!", self.name),
                amount: None,
            },
            Action::Wait => ActionEffect {
                line: format!("{} waits...", self.name),
                amount: None,
            },
        }
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            name: self.name.clone(),
            leader: self.leader.clone(),
            health: self.health,
            initial_health: self.initial_health,
            alive: !self.is_defeated(),
            health_band: HealthBand::from_health(self.health),
        }
    }
}
