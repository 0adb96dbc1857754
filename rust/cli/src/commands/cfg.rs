//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value paired with its
//! source (`default`, `file` or `env`):
//!
//! ```json
//! {
//!   "starting_chips": {
//!     "value": 1000,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_chips": {
            "value": config.starting_chips,
            "source": sources.starting_chips,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "samples": {
            "value": config.samples,
            "source": sources.samples,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok(), "cfg command should succeed");

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");
        for key in ["starting_chips", "seed", "samples", "ai"] {
            assert!(json.get(key).is_some(), "missing {key}");
            assert!(json[key].get("source").is_some());
        }
        assert!(output.contains('\n'), "output should be pretty-printed");
        assert!(err.is_empty(), "should not write to stderr on success");
    }

    #[test]
    #[serial]
    fn test_cfg_reports_env_source() {
        // SAFETY: serialized with the other env tests.
        unsafe { std::env::set_var("HEADSUP_SAMPLES", "321") };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        unsafe { std::env::remove_var("HEADSUP_SAMPLES") };

        assert!(result.is_ok());
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["samples"]["value"], 321);
        assert_eq!(json["samples"]["source"], "env");
    }

    #[test]
    #[serial]
    fn test_cfg_handles_config_error() {
        unsafe { std::env::set_var("HEADSUP_CHIPS", "zero") };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        unsafe { std::env::remove_var("HEADSUP_CHIPS") };

        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(String::from_utf8(err).unwrap().starts_with("Error: Invalid configuration"));
    }
}
