//! Layered simulation settings.
//!
//! Values resolve from built-in defaults, then a TOML file named by
//! `BJSIM_CONFIG`, then `BJSIM_*` environment variables. Command-line flags
//! are applied last by the command handlers. Every value remembers where it
//! came from so `cfg` can report it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use bjsim_ai::STRATEGIES;
use bjsim_engine::sim::SimConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub decks: u8,
    pub shuffle: f64,
    pub strategy: String,
    pub table: Option<PathBuf>,
    pub wager: f64,
    pub workers: Option<usize>,
    pub seed: Option<u64>,
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
    pub decks: ValueSource,
    pub shuffle: ValueSource,
    pub strategy: ValueSource,
    pub table: ValueSource,
    pub wager: ValueSource,
    pub workers: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            decks: ValueSource::Default,
            shuffle: ValueSource::Default,
            strategy: ValueSource::Default,
            table: ValueSource::Default,
            wager: ValueSource::Default,
            workers: ValueSource::Default,
            seed: ValueSource::Default,
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
        let sim = SimConfig::default();
        Self {
            decks: sim.num_decks,
            shuffle: sim.shuffle_threshold,
            strategy: "basic".into(),
            table: None,
            wager: sim.wager,
            workers: None,
            seed: None,
        }
    }
}

impl Config {
    /// Engine configuration for a run of `simulations` rounds.
    pub fn sim_config(&self, simulations: u64) -> SimConfig {
        SimConfig {
            simulations,
            num_decks: self.decks,
            shuffle_threshold: self.shuffle,
            wager: self.wager,
            workers: self.workers,
            seed: self.seed,
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
            ConfigError::Io(e) => write!(f, "failed to read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Resolved and validated layers, as reported by `cfg`.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let resolved = load_layers()?;
    validate(&resolved.config)?;
    Ok(resolved)
}

/// Reads the file and environment layers without range checks, so that
/// command-line flags can still replace an out-of-range value.
pub fn load_layers() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("BJSIM_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.shuffle {
            cfg.shuffle = v;
            sources.shuffle = ValueSource::File;
        }
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
        if let Some(v) = f.table {
            cfg.table = Some(v);
            sources.table = ValueSource::File;
        }
        if let Some(v) = f.wager {
            cfg.wager = v;
            sources.wager = ValueSource::File;
        }
        if let Some(v) = f.workers {
            cfg.workers = Some(v);
            sources.workers = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(v) = env_var("BJSIM_DECKS") {
        cfg.decks = parse_env("BJSIM_DECKS", &v)?;
        sources.decks = ValueSource::Env;
    }
    if let Some(v) = env_var("BJSIM_SHUFFLE") {
        cfg.shuffle = parse_env("BJSIM_SHUFFLE", &v)?;
        sources.shuffle = ValueSource::Env;
    }
    if let Some(v) = env_var("BJSIM_STRATEGY") {
        cfg.strategy = v;
        sources.strategy = ValueSource::Env;
    }
    if let Some(v) = env_var("BJSIM_WAGER") {
        cfg.wager = parse_env("BJSIM_WAGER", &v)?;
        sources.wager = ValueSource::Env;
    }
    if let Some(v) = env_var("BJSIM_WORKERS") {
        cfg.workers = Some(parse_env("BJSIM_WORKERS", &v)?);
        sources.workers = ValueSource::Env;
    }
    if let Some(v) = env_var("BJSIM_SEED") {
        cfg.seed = Some(parse_env("BJSIM_SEED", &v)?);
        sources.seed = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    decks: Option<u8>,
    #[serde(default)]
    shuffle: Option<f64>,
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    table: Option<PathBuf>,
    #[serde(default)]
    wager: Option<f64>,
    #[serde(default)]
    workers: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
}

/// Set and non-empty.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", name, value)))
}

/// Range checks shared with the engine, plus the strategy name.
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !STRATEGIES.contains(&cfg.strategy.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown strategy {:?} (expected one of {})",
            cfg.strategy,
            STRATEGIES.join(", ")
        )));
    }
    cfg.sim_config(1)
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}
