//! # headsup-ai: Computer Opponents
//!
//! Automated seats for the heads-up table. Every opponent implements the
//! engine's [`DecisionPolicy`] trait and only ever sees a
//! [`DecisionContext`](headsup_engine::policy::DecisionContext): its own hole
//! cards, the board and the betting.
//!
//! ## Core Components
//!
//! - [`baseline`] - Equity-driven opponent with a tunable [`baseline::Personality`]
//! - [`passive`] - Calling station that never folds or raises
//! - [`create_ai`] - Factory for opponents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_ai::create_ai;
//! use headsup_engine::engine::{Table, TableConfig};
//!
//! let ai = create_ai("baseline", 42).unwrap();
//! let mut table = Table::new(&TableConfig::default(), ai);
//! table.start_hand().unwrap();
//! assert_eq!(table.policy_name(), "BaselineAI");
//! ```

use headsup_engine::policy::DecisionPolicy;
use thiserror::Error;

pub mod baseline;
pub mod passive;

/// Names accepted by [`create_ai`].
pub const AI_KINDS: [&str; 2] = ["baseline", "passive"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown AI type: {0} (expected one of: baseline, passive)")]
    UnknownPolicy(String),
}

/// Factory function to create AI opponents by type string.
///
/// `seed` drives any randomness the opponent uses, so the same seed replays
/// the same decisions.
///
/// # Example
///
/// ```rust
/// use headsup_ai::{create_ai, AiError};
///
/// let ai = create_ai("passive", 0).unwrap();
/// assert_eq!(ai.name(), "PassiveAI");
/// assert!(matches!(create_ai("shark", 0), Err(AiError::UnknownPolicy(_))));
/// ```
pub fn create_ai(kind: &str, seed: u64) -> Result<Box<dyn DecisionPolicy>, AiError> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "baseline" => Ok(Box::new(baseline::BaselineAI::new(seed))),
        "passive" => Ok(Box::new(passive::PassiveAI)),
        _ => Err(AiError::UnknownPolicy(kind.to_string())),
    }
}
