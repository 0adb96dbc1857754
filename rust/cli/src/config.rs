use serde::{Deserialize, Serialize};
use std::fs;

use headsup_ai::AI_KINDS;
use headsup_engine::engine::DEFAULT_STARTING_CHIPS;

/// Default Monte Carlo samples for `equity` when no flag is given.
pub const DEFAULT_SAMPLES: u32 = 2_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_chips: u32,
    pub seed: Option<u64>,
    pub samples: u32,
    pub ai: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_chips: ValueSource,
    pub seed: ValueSource,
    pub samples: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_chips: ValueSource::Default,
            seed: ValueSource::Default,
            samples: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_chips: DEFAULT_STARTING_CHIPS,
            seed: None,
            samples: DEFAULT_SAMPLES,
            ai: "baseline".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Defaults, then the TOML file named by `HEADSUP_CONFIG`, then
/// `HEADSUP_*` environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HEADSUP_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.samples {
            cfg.samples = v;
            sources.samples = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("HEADSUP_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(chips) = std::env::var("HEADSUP_CHIPS")
        && !chips.is_empty()
    {
        cfg.starting_chips = chips
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting chips".into()))?;
        sources.starting_chips = ValueSource::Env;
    }
    if let Ok(samples) = std::env::var("HEADSUP_SAMPLES")
        && !samples.is_empty()
    {
        cfg.samples = samples
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid samples".into()))?;
        sources.samples = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var("HEADSUP_AI")
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    samples: Option<u32>,
    #[serde(default)]
    ai: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_chips == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_chips must be >0".into(),
        ));
    }
    if cfg.samples == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: samples must be >0".into(),
        ));
    }
    if !AI_KINDS.contains(&cfg.ai.to_ascii_lowercase().as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of: {})",
            cfg.ai,
            AI_KINDS.join(", ")
        )));
    }
    Ok(())
}
