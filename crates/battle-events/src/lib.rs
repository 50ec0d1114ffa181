//! Shared vocabulary and record types for agent battles.
//!
//! This crate contains pure data structures with no battle logic.
//! The engine in `battle-core` produces these values; presentation code
//! consumes them. Display strings live here only as English defaults.

pub mod action;
pub mod perception;
pub mod record;
pub mod snapshot;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

pub use action::Action;
pub use perception::{Perception, RandomEvent, ThreatLevel};
pub use record::{RoundRecord, Slot, TurnRecord, Victory};
pub use snapshot::{AgentSnapshot, HealthBand, SessionSnapshot};
