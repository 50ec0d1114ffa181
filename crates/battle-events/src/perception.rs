//! Perception Types
//!
//! What an agent observes at the start of its turn.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the opponent is still standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatLevel {
    Threat,
    NoThreat,
}

impl ThreatLevel {
    /// Classifies an opponent by its current health.
    pub fn from_opponent_health(health: i32) -> Self {
        if health > 0 {
            ThreatLevel::Threat
        } else {
            ThreatLevel::NoThreat
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreatLevel::Threat => write!(f, "threat"),
            ThreatLevel::NoThreat => write!(f, "no_threat"),
        }
    }
}

/// Environmental event sampled once per perceive call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomEvent {
    Heal,
    Boost,
    Nothing,
}

impl RandomEvent {
    /// All events, in sampling order.
    pub const ALL: [RandomEvent; 3] = [RandomEvent::Heal, RandomEvent::Boost, RandomEvent::Nothing];
}

impl fmt::Display for RandomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomEvent::Heal => write!(f, "heal"),
            RandomEvent::Boost => write!(f, "boost"),
            RandomEvent::Nothing => write!(f, "nothing"),
        }
    }
}

/// Ephemeral observation tuple, consumed by the decision policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perception {
    pub threat_level: ThreatLevel,
    pub random_event: RandomEvent,
}

impl Perception {
    pub fn new(threat_level: ThreatLevel, random_event: RandomEvent) -> Self {
        Self {
            threat_level,
            random_event,
        }
    }
}
