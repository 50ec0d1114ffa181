//! Configuration System
//!
//! Loads battle settings from battle.toml. Every field has a default, so a
//! file only needs to name what it changes.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::agent::{combat, Agent};
use crate::resolver::{ResolverOptions, TurnOrder};

/// Default config file path
pub const DEFAULT_CONFIG_PATH: &str = "battle.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    #[serde(default = "AgentConfig::default_first")]
    pub first: AgentConfig,
    #[serde(default = "AgentConfig::default_second")]
    pub second: AgentConfig,
    #[serde(default)]
    pub resolution: ResolutionConfig,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            first: AgentConfig::default_first(),
            second: AgentConfig::default_second(),
            resolution: ResolutionConfig::default(),
        }
    }
}

/// One combatant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    #[serde(default = "default_health")]
    pub health: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader: Option<String>,
}

fn default_health() -> i32 {
    combat::DEFAULT_HEALTH
}

impl AgentConfig {
    fn default_first() -> Self {
        Self::named("Thor")
    }

    fn default_second() -> Self {
        Self::named("Loki")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: combat::DEFAULT_HEALTH,
            leader: None,
        }
    }

    pub fn to_agent(&self) -> Agent {
        let agent = Agent::new(self.name.clone(), self.health);
        match &self.leader {
            Some(leader) => agent.with_leader(leader.clone()),
            None => agent,
        }
    }
}

/// Round resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    pub turn_order: TurnOrder,
    pub narrate_reasoning: bool,
    /// Fixed seed for reproducible battles; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ResolutionConfig {
    pub fn options(&self) -> ResolverOptions {
        ResolverOptions {
            turn_order: self.turn_order,
            narrate_reasoning: self.narrate_reasoning,
        }
    }
}

impl BattleConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, TomlSerializeError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from the default path, or fall back to defaults if missing or invalid.
    pub fn load_or_default() -> Self {
        if !Path::new(DEFAULT_CONFIG_PATH).exists() {
            return Self::default();
        }
        Self::from_file(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", DEFAULT_CONFIG_PATH, e);
            Self::default()
        })
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Error that can occur during TOML serialization.
#[derive(Debug, Error)]
#[error("TOML serialize error: {0}")]
pub struct TomlSerializeError(#[from] pub toml::ser::Error);
