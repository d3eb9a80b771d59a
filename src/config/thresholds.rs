use serde::{Deserialize, Serialize};

/// Cut-offs used when normalizing conflict and classifying scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Received negative mentions at which conflict risk saturates
    #[serde(default = "default_conflict_saturation")]
    pub conflict_saturation: u32,

    /// Scores strictly above this are reported as at risk
    #[serde(default = "default_at_risk")]
    pub at_risk: u8,

    /// Scores strictly above this (and not at risk) are elevated
    #[serde(default = "default_elevated")]
    pub elevated: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            conflict_saturation: default_conflict_saturation(),
            at_risk: default_at_risk(),
            elevated: default_elevated(),
        }
    }
}

impl Thresholds {
    pub fn collect_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.conflict_saturation == 0 {
            violations.push("thresholds.conflict_saturation must be at least 1".to_string());
        }
        if self.at_risk > 100 {
            violations.push(format!(
                "thresholds.at_risk {} must be between 0 and 100",
                self.at_risk
            ));
        }
        if self.elevated > self.at_risk {
            violations.push(format!(
                "thresholds.elevated {} must not exceed thresholds.at_risk {}",
                self.elevated, self.at_risk
            ));
        }
        violations
    }
}

fn default_conflict_saturation() -> u32 {
    3
}
fn default_at_risk() -> u8 {
    60
}
fn default_elevated() -> u8 {
    50
}

/// Likert scale used for the climate question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateScale {
    #[serde(default = "default_max_rating")]
    pub max_rating: u8,

    /// Climate risk assumed for students without a response
    #[serde(default = "default_neutral_risk")]
    pub neutral_risk: f64,
}

impl Default for ClimateScale {
    fn default() -> Self {
        Self {
            max_rating: default_max_rating(),
            neutral_risk: default_neutral_risk(),
        }
    }
}

impl ClimateScale {
    pub fn collect_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.max_rating == 0 {
            violations.push("climate.max_rating must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.neutral_risk) {
            violations.push(format!(
                "climate.neutral_risk {} must be between 0.0 and 1.0",
                self.neutral_risk
            ));
        }
        violations
    }

    pub fn contains(&self, rating: u8) -> bool {
        (1..=self.max_rating).contains(&rating)
    }
}

fn default_max_rating() -> u8 {
    5
}
fn default_neutral_risk() -> f64 {
    0.5
}

/// Limits the survey form imposes on each response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyLimits {
    #[serde(default = "default_max_preferred")]
    pub max_preferred: usize,

    #[serde(default = "default_max_uncomfortable")]
    pub max_uncomfortable: usize,
}

impl Default for SurveyLimits {
    fn default() -> Self {
        Self {
            max_preferred: default_max_preferred(),
            max_uncomfortable: default_max_uncomfortable(),
        }
    }
}

fn default_max_preferred() -> usize {
    3
}
fn default_max_uncomfortable() -> usize {
    2
}
