//! TOML job-file deserialisation.

use serde::Deserialize;
use skyrad_params::geometry::Geometry;

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    pub geometry: Geometry,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// File to write the block to. Default: stdout.
    #[serde(default)]
    pub file: Option<String>,
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: JobConfig = toml::from_str(&content)?;
    Ok(config)
}
