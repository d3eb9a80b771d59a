use serde::{Deserialize, Serialize};

use super::scoring::{IsolationSplit, ScoringWeights};
use super::thresholds::{ClimateScale, SurveyLimits, Thresholds};
use crate::errors::{Error, Result};

/// Root configuration structure for predictr
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Points per risk factor
    #[serde(default)]
    pub weights: ScoringWeights,

    /// Split of the isolation factor
    #[serde(default)]
    pub isolation: IsolationSplit,

    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default)]
    pub climate: ClimateScale,

    #[serde(default)]
    pub survey: SurveyLimits,

    /// Score nodes on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            isolation: IsolationSplit::default(),
            thresholds: Thresholds::default(),
            climate: ClimateScale::default(),
            survey: SurveyLimits::default(),
            parallel: default_parallel(),
        }
    }
}

fn default_parallel() -> bool {
    true
}

impl RiskConfig {
    /// Every violation across all sections.
    pub fn collect_violations(&self) -> Vec<String> {
        self.weights
            .collect_violations()
            .into_iter()
            .chain(self.isolation.collect_violations())
            .chain(self.thresholds.collect_violations())
            .chain(self.climate.collect_violations())
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        let violations = self.collect_violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::Configuration(violations.join("; ")))
        }
    }
}
