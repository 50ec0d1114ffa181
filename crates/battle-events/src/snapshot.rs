//! Snapshot Types
//!
//! Read-only view of a session for presentation code. Snapshots are
//! produced on demand and never fed back into the engine.

use serde::{Deserialize, Serialize};

/// Coarse health classification, used for health-bar coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    /// Above 20
    Healthy,
    /// Above 10
    Wounded,
    /// 10 or below, including defeated agents
    Critical,
}

impl HealthBand {
    pub fn from_health(health: i32) -> Self {
        if health > 20 {
            HealthBand::Healthy
        } else if health > 10 {
            HealthBand::Wounded
        } else {
            HealthBand::Critical
        }
    }
}

/// Agent state at snapshot time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader: Option<String>,
    pub health: i32,
    pub initial_health: i32,
    pub alive: bool,
    pub health_band: HealthBand,
}

/// Full session snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub round_number: u32,
    pub battle_over: bool,
    pub first: AgentSnapshot,
    pub second: AgentSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

impl SessionSnapshot {
    /// Rounds actually fought so far.
    pub fn rounds_fought(&self) -> u32 {
        self.round_number.saturating_sub(1)
    }

    /// Find an agent by name.
    pub fn find_agent(&self, name: &str) -> Option<&AgentSnapshot> {
        [&self.first, &self.second]
            .into_iter()
            .find(|agent| agent.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_band_thresholds() {
        assert_eq!(HealthBand::from_health(30), HealthBand::Healthy);
        assert_eq!(HealthBand::from_health(21), HealthBand::Healthy);
        assert_eq!(HealthBand::from_health(20), HealthBand::Wounded);
        assert_eq!(HealthBand::from_health(11), HealthBand::Wounded);
        assert_eq!(HealthBand::from_health(10), HealthBand::Critical);
        assert_eq!(HealthBand::from_health(-4), HealthBand::Critical);
    }

    #[test]
    fn test_snapshot_deserialize_without_optionals() {
        let json = r#"{
            "round_number": 1,
            "battle_over": false,
            "first": {"name": "Thor", "health": 30, "initial_health": 30, "alive": true, "health_band": "healthy"},
            "second": {"name": "Loki", "health": 30, "initial_health": 30, "alive": true, "health_band": "healthy"}
        }"#;
        let snapshot: SessionSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.rounds_fought(), 0);
        assert!(snapshot.winner.is_none());
        assert!(snapshot.first.leader.is_none());
        assert_eq!(snapshot.find_agent("Loki").unwrap().health, 30);
        assert!(snapshot.find_agent("Odin").is_none());
    }
}
