use serde::{Deserialize, Serialize};

/// Point budget for the fixed weighted rubric. Categories are additive and
/// independent; nothing here normalizes the total to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricConfig {
    pub experience_points: f64,
    pub skills_points: f64,
    pub industry_points: f64,
    pub level_points: f64,
    pub managerial_points: f64,
    /// Ceiling applied to the summed score when the CV quality is `low`.
    pub low_quality_cap: f64,
}

impl Default for RubricConfig {
    fn default() -> Self {
        Self {
            experience_points: 25.0,
            skills_points: 40.0,
            industry_points: 20.0,
            level_points: 10.0,
            managerial_points: 5.0,
            low_quality_cap: 30.0,
        }
    }
}
