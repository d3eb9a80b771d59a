//! Scoring configuration for the integrated risk formula
//!
//! This module contains the weight configurations for:
//! - The three risk factors (conflict, isolation, climate), expressed in points
//! - The split of the isolation factor between "not chosen" and "not choosing"

use serde::{Deserialize, Serialize};

/// Points each normalized risk factor contributes to the 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Points for received peer rejection (0-100)
    #[serde(default = "default_conflict_weight")]
    pub conflict: f64,

    /// Points for structural isolation (0-100)
    #[serde(default = "default_isolation_weight")]
    pub isolation: f64,

    /// Points for the student's own climate perception (0-100)
    #[serde(default = "default_climate_weight")]
    pub climate: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            conflict: default_conflict_weight(),
            isolation: default_isolation_weight(),
            climate: default_climate_weight(),
        }
    }
}

impl ScoringWeights {
    pub const TOTAL_POINTS: f64 = 100.0;

    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=Self::TOTAL_POINTS).contains(&weight)
    }

    pub fn total(&self) -> f64 {
        self.conflict + self.isolation + self.climate
    }

    /// Collect every weight violation instead of stopping at the first.
    pub fn collect_violations(&self) -> Vec<String> {
        let mut violations: Vec<String> = [
            ("conflict", self.conflict),
            ("isolation", self.isolation),
            ("climate", self.climate),
        ]
        .iter()
        .filter(|(_, weight)| !Self::is_valid_weight(*weight))
        .map(|(name, weight)| format!("{name} weight {weight} must be between 0 and 100"))
        .collect();

        if (self.total() - Self::TOTAL_POINTS).abs() > 0.001 {
            violations.push(format!(
                "Scoring weights (conflict, isolation, climate) must sum to 100, but sum to {:.3}",
                self.total()
            ));
        }

        violations
    }
}

// Default weights: direct rejection dominates, then structure, then perception
pub fn default_conflict_weight() -> f64 {
    50.0
}
pub fn default_isolation_weight() -> f64 {
    30.0
}
pub fn default_climate_weight() -> f64 {
    20.0
}

/// How the isolation factor divides between its two components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsolationSplit {
    /// Share scaled by how far in-degree falls below the classroom maximum
    #[serde(default = "default_not_chosen_share")]
    pub not_chosen: f64,

    /// Flat share added when the student chose nobody
    #[serde(default = "default_not_choosing_share")]
    pub not_choosing: f64,
}

impl Default for IsolationSplit {
    fn default() -> Self {
        Self {
            not_chosen: default_not_chosen_share(),
            not_choosing: default_not_choosing_share(),
        }
    }
}

impl IsolationSplit {
    pub fn collect_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        for (name, share) in [
            ("not_chosen", self.not_chosen),
            ("not_choosing", self.not_choosing),
        ] {
            if !(0.0..=1.0).contains(&share) {
                violations.push(format!("isolation.{name} {share} must be between 0.0 and 1.0"));
            }
        }
        let sum = self.not_chosen + self.not_choosing;
        if (sum - 1.0).abs() > 0.001 {
            violations.push(format!(
                "isolation shares must sum to 1.0, but sum to {:.3}",
                sum
            ));
        }
        violations
    }
}

pub fn default_not_chosen_share() -> f64 {
    0.7
}
pub fn default_not_choosing_share() -> f64 {
    0.3
}
