// Sub-modules
mod core;
mod loader;
mod scoring;
mod thresholds;

pub use self::core::RiskConfig;
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE,
};
pub use scoring::{
    default_climate_weight, default_conflict_weight, default_isolation_weight,
    default_not_choosing_share, default_not_chosen_share, IsolationSplit, ScoringWeights,
};
pub use thresholds::{ClimateScale, SurveyLimits, Thresholds};
