use eyre::{Result, WrapErr, ensure};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "gradesort.toml";

/// An `f64` never carries more significant digits than this.
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Significant digits used for grades and the class average.
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ReportConfig {
    pub empty_roster: EmptyRoster,
}

/// What to print as the class average when no student was entered.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyRoster {
    #[default]
    Undefined,
    /// Perform the `0 / 0` division anyway.
    Divide,
}

impl Config {
    /// Load `file_name`, or the default configuration file if it exists,
    /// or fall back to built-in defaults.
    pub fn load(file_name: Option<&Path>) -> Result<Config> {
        Self::load_or_default(file_name, Path::new(DEFAULT_CONFIG_FILE))
    }

    fn load_or_default(file_name: Option<&Path>, default_file: &Path) -> Result<Config> {
        let path = match file_name {
            Some(path) => path,
            None if default_file.exists() => default_file,
            None => {
                debug!("no configuration file, using defaults");
                return Ok(Config::default());
            }
        };
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("cannot load configuration file {}", path.display()))?;
        let config = Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        ensure!(
            config.display.precision <= MAX_PRECISION,
            "display.precision must be at most {MAX_PRECISION}, got {}",
            config.display.precision
        );
        Ok(config)
    }
}
