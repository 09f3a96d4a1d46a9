use crate::conf::{ConfigError, RelstatConfig};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "relstat.hcl";

/// Loads `path` if given, else `relstat.hcl` from `dir` if present, else
/// the defaults.
pub fn load_config(path: Option<&Path>, dir: &Path) -> Result<RelstatConfig, ConfigError> {
    if let Some(path) = path {
        return load_config_file(path);
    }

    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        return load_config_file(&candidate);
    }

    tracing::debug!("no config file found, using defaults");
    Ok(RelstatConfig::default())
}

pub fn load_config_file(path: &Path) -> Result<RelstatConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: RelstatConfig = hcl::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
    cfg.validate()?;

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}
