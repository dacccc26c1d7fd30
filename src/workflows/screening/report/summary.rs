use super::views::{BandTally, MatchBand, PipelineStats, RankedCandidate, SearchScope, SortKey};
use crate::workflows::screening::domain::Candidate;

/// Case-insensitive substring search over the fields selected by `scope`.
/// A blank query retains every candidate.
pub(crate) fn matches_search(candidate: &Candidate, query: &str, scope: SearchScope) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |value: &str| value.to_lowercase().contains(&needle);
    let skills_hit = || candidate.skills.iter().any(|skill| contains(skill));
    let industry_hit = || candidate.industry.iter().any(|label| contains(label));
    let years_hit = || contains(&candidate.years_of_experience.to_string());
    let level_hit = || contains(&candidate.current_level);

    match scope {
        SearchScope::All => {
            contains(&candidate.name)
                || contains(&candidate.last_position)
                || skills_hit()
                || industry_hit()
                || years_hit()
                || level_hit()
        }
        SearchScope::Skills => skills_hit(),
        SearchScope::Experience => years_hit() || level_hit(),
        SearchScope::Industry => industry_hit(),
    }
}

pub(crate) fn filter_ranked(
    ranked: Vec<RankedCandidate>,
    query: &str,
    scope: SearchScope,
) -> Vec<RankedCandidate> {
    ranked
        .into_iter()
        .filter(|entry| matches_search(&entry.candidate, query, scope))
        .collect()
}

/// Stable descending sort; tied entries keep their pool order.
pub(crate) fn sort_ranked(ranked: &mut [RankedCandidate], key: SortKey) {
    match key {
        SortKey::Score => ranked.sort_by(|a, b| b.report.score.cmp(&a.report.score)),
        SortKey::Experience => ranked.sort_by(|a, b| {
            b.candidate
                .years_of_experience
                .cmp(&a.candidate.years_of_experience)
        }),
    }
}

pub(crate) fn pipeline_stats(ranked: &[RankedCandidate]) -> PipelineStats {
    let total = ranked.len();
    let order = [
        MatchBand::Excellent,
        MatchBand::Good,
        MatchBand::Fair,
        MatchBand::Low,
    ];

    let bands = order
        .into_iter()
        .map(|band| {
            let count = ranked.iter().filter(|entry| entry.band() == band).count();
            let pct = if total > 0 {
                count as f32 / total as f32 * 100.0
            } else {
                0.0
            };
            BandTally {
                band,
                band_label: band.label(),
                count,
                pct,
            }
        })
        .collect();

    let spam_count = ranked.iter().filter(|entry| entry.report.is_spam).count();
    let flagged_strong = ranked
        .iter()
        .filter(|entry| entry.report.is_spam && entry.report.score >= 80)
        .count();

    PipelineStats {
        total,
        bands,
        spam_count,
        flagged_strong,
    }
}
