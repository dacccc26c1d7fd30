mod config;
mod rules;

pub use config::RubricConfig;

use super::domain::{Candidate, CvQuality, JobRequirement};
use serde::{Deserialize, Serialize};

/// Stateless engine applying the rubric configuration to one
/// candidate/job pair. Never mutates its inputs and never fails for
/// well-formed data.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: RubricConfig,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(RubricConfig::default())
    }
}

impl MatchEngine {
    pub fn new(config: RubricConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, candidate: &Candidate, job: &JobRequirement) -> MatchReport {
        let (components, reasons, gaps, mut total) =
            rules::score_candidate(candidate, job, &self.config);

        // Only an explicitly low-quality CV caps the score; a spam flag on
        // its own leaves strong profiles visible for manual review.
        if candidate.cv_quality == CvQuality::Low {
            total = total.min(self.config.low_quality_cap);
        }

        MatchReport {
            score: total.round() as u16,
            components,
            reasons,
            gaps,
            is_spam: candidate.is_spam,
            cv_quality: candidate.cv_quality,
        }
    }
}

/// Rubric factors permitted to contribute points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchFactor {
    Experience,
    Skills,
    Industry,
    Seniority,
    Managerial,
}

/// Discrete contribution to a match score, recorded wherever the rubric
/// adds to the running total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    pub points: f64,
}

/// Scoring output for one candidate/job pair. Produced fresh per call;
/// nothing is cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: u16,
    pub components: Vec<ScoreComponent>,
    pub reasons: Vec<String>,
    pub gaps: Vec<String>,
    pub is_spam: bool,
    pub cv_quality: CvQuality,
}

impl MatchReport {
    pub fn component(&self, factor: MatchFactor) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }
}
