//! Sample data fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // battle-events = { path = "../battle-events", features = ["test-fixtures"] }
//!
//! use battle_events::fixtures;
//!
//! let rounds = fixtures::sample_rounds();
//! let snapshot = fixtures::sample_snapshot();
//! ```

use crate::{RoundRecord, SessionSnapshot};

/// Returns a finished four-round battle between Thor and Loki.
///
/// Thor holds the first slot under fixed ordering and wins in round 4.
/// Round 2 contains Loki's heal, round 3 a defend.
pub fn sample_rounds() -> Vec<RoundRecord> {
    let json = include_str!("../tests/fixtures/sample_rounds.json");
    serde_json::from_str(json).expect("Failed to parse sample_rounds.json")
}

/// Returns the snapshot taken after the sample battle.
pub fn sample_snapshot() -> SessionSnapshot {
    let json = include_str!("../tests/fixtures/sample_snapshot.json");
    serde_json::from_str(json).expect("Failed to parse sample_snapshot.json")
}

/// Returns the round that ended the sample battle.
pub fn final_round() -> RoundRecord {
    sample_rounds()
        .into_iter()
        .find(|r| r.ended_battle())
        .expect("Sample battle should end with a victory")
}
