mod insights;
mod summary;
mod views;

pub use insights::ComparisonInsights;
pub use views::{
    BandTally, CandidateScoreView, MatchBand, PipelineStats, RankedCandidate, SearchScope, SortKey,
};

pub(crate) use insights::build_comparison;
pub(crate) use summary::{filter_ranked, matches_search, pipeline_stats, sort_ranked};
