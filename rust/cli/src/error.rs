//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! any error to exit code [`crate::exit_code::ERROR`].

use std::fmt;

use headsup_ai::AiError;
use headsup_engine::errors::GameError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::ParseCard(_)
            | GameError::DuplicateCard(_)
            | GameError::InvalidCardCount { .. }
            | GameError::NoSamples => CliError::InvalidInput(error.to_string()),
            _ => CliError::Engine(error.to_string()),
        }
    }
}

impl From<AiError> for CliError {
    fn from(error: AiError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_engine::errors::InvalidAction;

    #[test]
    fn test_card_errors_are_input_errors() {
        let e: CliError = GameError::ParseCard("Zz".into()).into();
        assert!(matches!(e, CliError::InvalidInput(_)));
        assert_eq!(e.to_string(), "Invalid input: Cannot parse card: \"Zz\"");
    }

    #[test]
    fn test_rule_errors_are_engine_errors() {
        let e: CliError = GameError::from(InvalidAction::ZeroRaise).into();
        assert!(matches!(e, CliError::Engine(_)));
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error;
        let e = CliError::from(std::io::Error::other("boom"));
        assert!(e.source().is_some());
    }
}
