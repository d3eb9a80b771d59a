use crate::config::Thresholds;
use crate::core::RiskAnalysis;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display band for a 0-100 risk value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,      // score <= elevated
    Elevated, // elevated < score <= at_risk
    High,     // score > at_risk
}

impl RiskLevel {
    pub fn classify(score: u8, thresholds: &Thresholds) -> Self {
        if score > thresholds.at_risk {
            RiskLevel::High
        } else if score > thresholds.elevated {
            RiskLevel::Elevated
        } else {
            RiskLevel::Low
        }
    }
}

impl RiskAnalysis {
    /// Band of the classroom-wide index.
    pub fn global_level(&self, thresholds: &Thresholds) -> RiskLevel {
        RiskLevel::classify(self.global_risk, thresholds)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Elevated => "ELEVATED",
            RiskLevel::High => "HIGH",
        };
        f.write_str(label)
    }
}
