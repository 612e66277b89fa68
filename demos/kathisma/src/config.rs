use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use kt_core::Kathisma;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "kathisma.toml";

/// Top-level `kathisma.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KathismaConfig {
    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Export settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// Year to generate when `--year` is not given.
    #[serde(default)]
    pub year: Option<i32>,
    /// The group's default start offset, used when neither `--start-offset`
    /// nor a previous-year calendar is available.
    #[serde(default = "default_start_offset")]
    pub start_offset: u8,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self { year: None, start_offset: default_start_offset() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self { dir: default_output_dir() }
    }
}

fn default_start_offset() -> u8 {
    1
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("calendar")
}

impl KathismaConfig {
    /// Read `path` if given; otherwise `kathisma.toml` when it exists, or
    /// built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Path::new(DEFAULT_CONFIG_PATH),
            None => {
                debug!("no config file, using defaults");
                return Ok(Self::default());
            }
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::parse(&toml_str)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn parse(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse TOML config")
    }

    /// `[calendar].start_offset`, range-checked.
    pub fn group_default_offset(&self) -> Result<Kathisma> {
        Kathisma::new(self.calendar.start_offset).context("invalid [calendar].start_offset")
    }
}
