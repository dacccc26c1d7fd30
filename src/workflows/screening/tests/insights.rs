use super::common::*;
use crate::workflows::screening::report::{build_comparison, RankedCandidate};

fn ranked_pair() -> Vec<RankedCandidate> {
    let engine = engine();
    let job = banking_job();

    let weaker = {
        let mut candidate = strong_candidate();
        candidate.id.0 = 5;
        candidate.name = "Dewi Lestari".to_string();
        candidate.has_managerial_exp = false;
        candidate
    };

    vec![
        RankedCandidate {
            report: engine.score(&weaker, &job),
            candidate: weaker,
        },
        RankedCandidate {
            report: engine.score(&strong_candidate(), &job),
            candidate: strong_candidate(),
        },
    ]
}

#[test]
fn comparison_ranks_by_descending_score() {
    let insights = build_comparison(ranked_pair(), &banking_job());

    assert_eq!(insights.ranked.len(), 2);
    assert_eq!(insights.top().candidate.name, "Ahmad Rizky");
    assert!(insights.ranked[0].report.score >= insights.ranked[1].report.score);
}

#[test]
fn exceptional_tier_leads_the_justifications() {
    let insights = build_comparison(ranked_pair(), &banking_job());

    assert_eq!(
        insights.justifications[0],
        "Ahmad Rizky shows exceptional compatibility at 100%"
    );
}

#[test]
fn justifications_cover_experience_skills_managerial_and_industry() {
    let insights = build_comparison(ranked_pair(), &banking_job());

    assert!(insights
        .justifications
        .contains(&"6 years of experience clears the 5-year minimum".to_string()));
    assert!(insights
        .justifications
        .contains(&"covers 6 of 6 required skills".to_string()));
    assert!(insights
        .justifications
        .contains(&"brings the managerial background the role requires".to_string()));
    assert!(insights
        .justifications
        .contains(&"relevant industry exposure: Banking, Fintech".to_string()));
}

#[test]
fn strong_tier_applies_between_sixty_and_eighty() {
    let engine = engine();
    let job = banking_job();

    // Drop industry and managerial credit: 25 + 40 + 10 = 75.
    let mid = {
        let mut candidate = strong_candidate();
        candidate.industry = strings(&["Agriculture"]);
        candidate.has_managerial_exp = false;
        candidate
    };
    let low = {
        let mut candidate = junior_candidate();
        candidate.id.0 = 6;
        candidate
    };

    let ranked = vec![
        RankedCandidate {
            report: engine.score(&low, &job),
            candidate: low,
        },
        RankedCandidate {
            report: engine.score(&mid, &job),
            candidate: mid,
        },
    ];

    let insights = build_comparison(ranked, &job);
    assert_eq!(insights.top().report.score, 75);
    assert_eq!(
        insights.justifications[0],
        "Ahmad Rizky shows strong compatibility at 75%"
    );
}

#[test]
fn no_tier_statement_below_sixty() {
    let engine = engine();
    let job = banking_job();

    let first = {
        let mut candidate = junior_candidate();
        candidate.cv_quality = crate::workflows::screening::domain::CvQuality::Medium;
        candidate
    };
    let second = {
        let mut candidate = junior_candidate();
        candidate.id.0 = 9;
        candidate.name = "Spam User ABC".to_string();
        candidate.years_of_experience = 0;
        candidate
    };

    let ranked = vec![
        RankedCandidate {
            report: engine.score(&first, &job),
            candidate: first,
        },
        RankedCandidate {
            report: engine.score(&second, &job),
            candidate: second,
        },
    ];

    let insights = build_comparison(ranked, &job);
    assert!(insights.top().report.score < 60);
    assert!(!insights
        .justifications
        .iter()
        .any(|line| line.contains("compatibility")));
    // The skills-coverage count is always present.
    assert!(insights
        .justifications
        .contains(&"covers 0 of 6 required skills".to_string()));
}
