use std::path::PathBuf;

/// Invalid values found while reading the configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an unsigned 64-bit integer, got {value:?}")]
    InvalidSeed { var: &'static str, value: String },
}

/// Runtime settings, read from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed for maze generation; a fresh OS seed is used when absent
    pub seed: Option<u64>,
    /// `tracing` filter directive
    pub log_filter: String,
    /// Directory for the log file; logs go to stderr when absent
    pub log_dir: Option<PathBuf>,
    /// Styled terminal output instead of plain ASCII
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: Config::DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
            color: true,
        }
    }
}

impl Config {
    pub const SEED_VAR: &'static str = "MAZE_SEED";
    pub const LOG_VAR: &'static str = "MAZE_LOG";
    pub const LOG_DIR_VAR: &'static str = "MAZE_LOG_DIR";
    pub const NO_COLOR_VAR: &'static str = "NO_COLOR";
    pub const DEFAULT_LOG_FILTER: &'static str = "info";

    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable lookup, so it can be tested without touching
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(Config::SEED_VAR).filter(|v| !v.trim().is_empty()) {
            config.seed = Some(value.trim().parse().map_err(|_| ConfigError::InvalidSeed {
                var: Config::SEED_VAR,
                value: value.clone(),
            })?);
        }
        if let Some(filter) = lookup(Config::LOG_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter;
        }
        config.log_dir = lookup(Config::LOG_DIR_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        // https://no-color.org: any non-empty value disables color
        config.color = lookup(Config::NO_COLOR_VAR).is_none_or(|v| v.is_empty());

        Ok(config)
    }
}
