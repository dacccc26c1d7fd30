use serde::Serialize;

use super::summary::sort_ranked;
use super::views::{RankedCandidate, SortKey};
use crate::workflows::screening::domain::JobRequirement;

/// Ranked side-by-side comparison of a small candidate set, with
/// synthesized hiring justifications for the front-runner. The text is
/// generated deterministically from the match data; no model is involved.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonInsights {
    pub ranked: Vec<RankedCandidate>,
    pub justifications: Vec<String>,
}

impl ComparisonInsights {
    pub fn top(&self) -> &RankedCandidate {
        // Builders only construct this with two or three entries.
        &self.ranked[0]
    }
}

pub(crate) fn build_comparison(
    mut ranked: Vec<RankedCandidate>,
    job: &JobRequirement,
) -> ComparisonInsights {
    sort_ranked(&mut ranked, SortKey::Score);

    let top = &ranked[0];
    let name = top.candidate.name.as_str();
    let score = top.report.score;
    let mut justifications = Vec::new();

    if score >= 80 {
        justifications.push(format!(
            "{name} shows exceptional compatibility at {score}%"
        ));
    } else if score >= 60 {
        justifications.push(format!("{name} shows strong compatibility at {score}%"));
    }

    let years = top.candidate.years_of_experience;
    if years >= job.min_experience {
        justifications.push(format!(
            "{} years of experience clears the {}-year minimum",
            years, job.min_experience
        ));
    }

    let matched_skills = job
        .required_skills
        .iter()
        .filter(|required| {
            top.candidate
                .skills
                .iter()
                .any(|skill| skill.to_lowercase() == required.name.to_lowercase())
        })
        .count();
    justifications.push(format!(
        "covers {} of {} required skills",
        matched_skills,
        job.required_skills.len()
    ));

    if job.must_have_managerial && top.candidate.has_managerial_exp {
        justifications.push("brings the managerial background the role requires".to_string());
    }

    let shared_industries: Vec<&str> = top
        .candidate
        .industry
        .iter()
        .filter(|label| {
            job.required_industry
                .iter()
                .any(|required| required.to_lowercase() == label.to_lowercase())
        })
        .map(String::as_str)
        .collect();
    if !shared_industries.is_empty() {
        justifications.push(format!(
            "relevant industry exposure: {}",
            shared_industries.join(", ")
        ));
    }

    ComparisonInsights {
        ranked,
        justifications,
    }
}
