//! Agent battle engine.
//!
//! Two agents fight in rounds. Each turn an agent perceives its opponent,
//! decides on an action with a fixed policy, and acts. The session stops
//! once either agent's health reaches zero.
//!
//! # Modules
//!
//! - [`rng`]: injectable random sources
//! - [`policy`]: the pure decision rules
//! - [`agent`]: perceive, decide, act
//! - [`resolver`]: turn ordering and per-round resolution
//! - [`session`]: round counter, terminal flag and log
//! - [`config`]: TOML configuration

pub mod agent;
pub mod config;
pub mod policy;
pub mod resolver;
pub mod rng;
pub mod session;

pub use agent::{combat, ActionEffect, Agent};
pub use config::{AgentConfig, BattleConfig, ConfigError, ResolutionConfig, TomlSerializeError};
pub use policy::PolicyOutcome;
pub use resolver::{ParseTurnOrderError, ResolverOptions, RoundOutcome, RoundResolver, TurnOrder};
pub use rng::{RandomSource, ScriptedSource, SimRng};
pub use session::{BattleSession, ALREADY_OVER};

pub use battle_events::{
    Action, AgentSnapshot, HealthBand, Perception, RandomEvent, RoundRecord, SessionSnapshot,
    Slot, ThreatLevel, TurnRecord, Victory,
};
