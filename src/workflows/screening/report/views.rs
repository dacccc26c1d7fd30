use serde::{Deserialize, Serialize};

use crate::workflows::screening::domain::{Candidate, CandidateId};
use crate::workflows::screening::rubric::MatchReport;

/// Score band shown next to each candidate in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Excellent,
    Good,
    Fair,
    Low,
}

impl MatchBand {
    pub const fn from_score(score: u16) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else if score >= 40 {
            Self::Fair
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match",
            Self::Good => "Good Match",
            Self::Fair => "Fair Match",
            Self::Low => "Low Match",
        }
    }
}

/// Which candidate fields the free-text search inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    All,
    Skills,
    Experience,
    Industry,
}

/// Sort order for the visible candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Score,
    Experience,
}

/// One candidate paired with the match report computed for the currently
/// selected job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    pub report: MatchReport,
}

impl RankedCandidate {
    pub fn band(&self) -> MatchBand {
        MatchBand::from_score(self.report.score)
    }
}

/// Flattened candidate row for rendering and JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateScoreView {
    pub candidate_id: CandidateId,
    pub name: String,
    pub last_position: String,
    pub years_of_experience: u8,
    pub score: u16,
    pub band: MatchBand,
    pub band_label: &'static str,
    pub is_spam: bool,
    pub cv_quality: &'static str,
    pub reasons: Vec<String>,
    pub gaps: Vec<String>,
}

impl From<&RankedCandidate> for CandidateScoreView {
    fn from(ranked: &RankedCandidate) -> Self {
        let band = ranked.band();
        Self {
            candidate_id: ranked.candidate.id,
            name: ranked.candidate.name.clone(),
            last_position: ranked.candidate.last_position.clone(),
            years_of_experience: ranked.candidate.years_of_experience,
            score: ranked.report.score,
            band,
            band_label: band.label(),
            is_spam: ranked.report.is_spam,
            cv_quality: ranked.report.cv_quality.label(),
            reasons: ranked.report.reasons.clone(),
            gaps: ranked.report.gaps.clone(),
        }
    }
}

/// Per-band slice of the scored pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct BandTally {
    pub band: MatchBand,
    pub band_label: &'static str,
    pub count: usize,
    pub pct: f32,
}

/// Aggregate statistics over the scored, unfiltered candidate pool.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStats {
    pub total: usize,
    pub bands: Vec<BandTally>,
    pub spam_count: usize,
    /// Spam-flagged profiles that still score in the excellent band;
    /// surfaced for manual review rather than suppressed.
    pub flagged_strong: usize,
}
