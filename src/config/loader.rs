use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::core::RiskConfig;
use crate::errors::{Result, ResultExt};

pub const CONFIG_FILE_NAME: &str = ".predictr.toml";

/// Parse `contents` as TOML and reject out-of-range values.
pub fn parse_and_validate_config(contents: &str) -> Result<RiskConfig> {
    let config = toml::from_str::<RiskConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load a config file the user named explicitly. Any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<RiskConfig> {
    let contents = fs::read_to_string(path)?;
    parse_and_validate_config(&contents)
        .context(format!("Invalid configuration in {}", path.display()))
}

/// Try a discovered config file; unreadable or invalid files yield `None`.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RiskConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        // Most ancestors have no config file
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("Cannot read {}: {}", config_path.display(), e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// `start` followed by its parents, at most `max_depth` directories in total.
pub fn directory_ancestors(start: &Path, max_depth: usize) -> impl Iterator<Item = &Path> + '_ {
    start.ancestors().take(max_depth)
}

/// Search `start` and its ancestors for `.predictr.toml`.
pub fn discover_config(start: &Path) -> RiskConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No {CONFIG_FILE_NAME} above {}, using defaults", start.display());
            RiskConfig::default()
        })
}

pub fn load_config() -> RiskConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RiskConfig::default()
        }
    }
}

/// Commented default configuration written by `predictr init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# predictr configuration

# Points each risk factor contributes; must sum to 100
[weights]
conflict = 50.0
isolation = 30.0
climate = 20.0

# Isolation factor split; must sum to 1.0
[isolation]
not_chosen = 0.7
not_choosing = 0.3

[thresholds]
conflict_saturation = 3
at_risk = 60
elevated = 50

[climate]
max_rating = 5
neutral_risk = 0.5

[survey]
max_preferred = 3
max_uncomfortable = 2
"#;
