use super::common::*;
use crate::workflows::screening::report::{
    filter_ranked, matches_search, pipeline_stats, sort_ranked, MatchBand, SearchScope, SortKey,
};

#[test]
fn band_cutoffs_match_the_pipeline_legend() {
    assert_eq!(MatchBand::from_score(100), MatchBand::Excellent);
    assert_eq!(MatchBand::from_score(80), MatchBand::Excellent);
    assert_eq!(MatchBand::from_score(79), MatchBand::Good);
    assert_eq!(MatchBand::from_score(60), MatchBand::Good);
    assert_eq!(MatchBand::from_score(59), MatchBand::Fair);
    assert_eq!(MatchBand::from_score(40), MatchBand::Fair);
    assert_eq!(MatchBand::from_score(39), MatchBand::Low);
    assert_eq!(MatchBand::Low.label(), "Low Match");
}

#[test]
fn blank_queries_retain_every_candidate() {
    let candidate = strong_candidate();
    assert!(matches_search(&candidate, "", SearchScope::All));
    assert!(matches_search(&candidate, "   ", SearchScope::Skills));
}

#[test]
fn skills_scope_matches_case_insensitive_substrings() {
    let candidate = strong_candidate();
    assert!(matches_search(&candidate, "python", SearchScope::Skills));
    assert!(matches_search(&candidate, "SQL", SearchScope::Skills));
    assert!(!matches_search(&candidate, "Kotlin", SearchScope::Skills));
    // Name is out of scope for a skills search.
    assert!(!matches_search(&candidate, "ahmad", SearchScope::Skills));
}

#[test]
fn all_scope_searches_name_position_and_profile_fields() {
    let candidate = strong_candidate();
    assert!(matches_search(&candidate, "ahmad", SearchScope::All));
    assert!(matches_search(&candidate, "mandiri", SearchScope::All));
    assert!(matches_search(&candidate, "fintech", SearchScope::All));
    assert!(matches_search(&candidate, "6", SearchScope::All));
    assert!(!matches_search(&candidate, "osint", SearchScope::All));
}

#[test]
fn experience_scope_covers_years_and_level_only() {
    let candidate = strong_candidate();
    assert!(matches_search(&candidate, "senior", SearchScope::Experience));
    assert!(matches_search(&candidate, "6", SearchScope::Experience));
    assert!(!matches_search(&candidate, "python", SearchScope::Experience));
}

#[test]
fn industry_scope_ignores_other_fields() {
    let candidate = strong_candidate();
    assert!(matches_search(&candidate, "banking", SearchScope::Industry));
    assert!(!matches_search(&candidate, "django", SearchScope::Industry));
}

#[test]
fn filter_keeps_only_matching_entries() {
    let ranked = vec![
        ranked_with_score(1, 90, false),
        ranked_with_score(2, 50, false),
    ];
    let kept = filter_ranked(ranked, "candidate 2", SearchScope::All);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].candidate.name, "Candidate 2");
}

#[test]
fn score_sort_is_descending_and_stable_on_ties() {
    let mut ranked = vec![
        ranked_with_score(1, 70, false),
        ranked_with_score(2, 90, false),
        ranked_with_score(3, 70, false),
        ranked_with_score(4, 70, false),
    ];

    sort_ranked(&mut ranked, SortKey::Score);

    let order: Vec<u32> = ranked.iter().map(|entry| entry.candidate.id.0).collect();
    assert_eq!(order, vec![2, 1, 3, 4]);
}

#[test]
fn experience_sort_is_descending() {
    let mut first = ranked_with_score(1, 10, false);
    first.candidate.years_of_experience = 3;
    let mut second = ranked_with_score(2, 90, false);
    second.candidate.years_of_experience = 9;

    let mut ranked = vec![first, second];
    sort_ranked(&mut ranked, SortKey::Experience);

    assert_eq!(ranked[0].candidate.id.0, 2);
}

#[test]
fn stats_partition_the_pool_into_bands() {
    let ranked = vec![
        ranked_with_score(1, 95, false),
        ranked_with_score(2, 85, true),
        ranked_with_score(3, 65, false),
        ranked_with_score(4, 45, false),
        ranked_with_score(5, 10, true),
    ];

    let stats = pipeline_stats(&ranked);

    assert_eq!(stats.total, 5);
    let counts: Vec<usize> = stats.bands.iter().map(|band| band.count).collect();
    assert_eq!(counts, vec![2, 1, 1, 1]);
    assert!((stats.bands[0].pct - 40.0).abs() < 1e-6);
    assert_eq!(stats.spam_count, 2);
    assert_eq!(stats.flagged_strong, 1);
}

#[test]
fn stats_over_an_empty_pool_report_zero_percentages() {
    let stats = pipeline_stats(&[]);
    assert_eq!(stats.total, 0);
    assert!(stats.bands.iter().all(|band| band.count == 0));
    assert!(stats.bands.iter().all(|band| band.pct == 0.0));
}
