//! Candidate screening: the job/candidate catalog, the weighted match
//! rubric, derived pipeline views, and the simulated CV upload flow.

pub mod catalog;
pub mod domain;
pub mod intake;
pub(crate) mod report;
pub(crate) mod rubric;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::Catalog;
pub use domain::{
    Candidate, CandidateId, Company, CompanyId, CvQuality, JobId, JobRequirement, SkillRequirement,
};
pub use intake::{CvExtractor, CvIntakeService, ExtractedCv, IntakeRecord, MockCvExtractor};
pub use report::{
    BandTally, CandidateScoreView, ComparisonInsights, MatchBand, PipelineStats, RankedCandidate,
    SearchScope, SortKey,
};
pub use rubric::{MatchEngine, MatchFactor, MatchReport, RubricConfig, ScoreComponent};
pub use session::{ScreeningSession, SessionError, MAX_COMPARE};
