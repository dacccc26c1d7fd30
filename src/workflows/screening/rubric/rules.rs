use super::config::RubricConfig;
use super::{MatchFactor, ScoreComponent};
use crate::workflows::screening::domain::{Candidate, JobRequirement};

/// Raw rubric pass over one candidate/job pair: the component trail, the
/// narrative reasons and gaps in evaluation order, and the unrounded sum.
pub(crate) fn score_candidate(
    candidate: &Candidate,
    job: &JobRequirement,
    config: &RubricConfig,
) -> (Vec<ScoreComponent>, Vec<String>, Vec<String>, f64) {
    let mut components = Vec::new();
    let mut reasons = Vec::new();
    let mut gaps = Vec::new();
    let mut total = 0.0;

    // Experience. Candidates above the maximum fall through both branches:
    // zero credit and no narrative line. Kept as the rubric specifies.
    let years = candidate.years_of_experience;
    if years >= job.min_experience && years <= job.max_experience {
        components.push(ScoreComponent {
            factor: MatchFactor::Experience,
            points: config.experience_points,
        });
        total += config.experience_points;
        reasons.push(format!(
            "experience: {} years within required {}-{}",
            years, job.min_experience, job.max_experience
        ));
    } else if years < job.min_experience {
        let partial = (config.experience_points * f64::from(years)
            / f64::from(job.min_experience))
        .max(0.0);
        components.push(ScoreComponent {
            factor: MatchFactor::Experience,
            points: partial,
        });
        total += partial;
        gaps.push(format!(
            "experience gap: has {} years, needs {} ({} years short)",
            years,
            job.min_experience,
            job.min_experience - years
        ));
    }

    // Skills. Each required skill is weighted independently; no clamp even
    // when the weights sum past 1.0.
    let candidate_skills: Vec<String> = candidate
        .skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .collect();
    let mut skill_points = 0.0;
    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for required in &job.required_skills {
        if candidate_skills.contains(&required.name.to_lowercase()) {
            skill_points += required.weight * config.skills_points;
            matched_skills.push(required.name.as_str());
        } else {
            missing_skills.push(required.name.as_str());
        }
    }

    components.push(ScoreComponent {
        factor: MatchFactor::Skills,
        points: skill_points,
    });
    total += skill_points;
    if !matched_skills.is_empty() {
        reasons.push(format!("skills matched: {}", matched_skills.join(", ")));
    }
    if !missing_skills.is_empty() {
        gaps.push(format!("missing skills: {}", missing_skills.join(", ")));
    }

    // Industry. All-or-nothing on any case-insensitive overlap.
    let matched_industries: Vec<&str> = candidate
        .industry
        .iter()
        .filter(|label| {
            job.required_industry
                .iter()
                .any(|required| required.to_lowercase() == label.to_lowercase())
        })
        .map(String::as_str)
        .collect();
    if matched_industries.is_empty() {
        gaps.push(format!(
            "no {} industry background",
            job.required_industry.join("/")
        ));
    } else {
        components.push(ScoreComponent {
            factor: MatchFactor::Industry,
            points: config.industry_points,
        });
        total += config.industry_points;
        reasons.push(format!(
            "industry background: {}",
            matched_industries.join(", ")
        ));
    }

    // Seniority level is an exact, case-sensitive label comparison.
    if candidate.current_level == job.required_level {
        components.push(ScoreComponent {
            factor: MatchFactor::Seniority,
            points: config.level_points,
        });
        total += config.level_points;
        reasons.push(format!("seniority level: {}", candidate.current_level));
    } else {
        gaps.push(format!(
            "level: currently {}, role needs {}",
            candidate.current_level, job.required_level
        ));
    }

    // Managerial credit is symmetric: matching in either direction earns the
    // points, but only the matched-required case gets a narrative line.
    if candidate.has_managerial_exp == job.must_have_managerial {
        components.push(ScoreComponent {
            factor: MatchFactor::Managerial,
            points: config.managerial_points,
        });
        total += config.managerial_points;
        if candidate.has_managerial_exp {
            reasons.push("managerial experience on record".to_string());
        }
    } else if job.must_have_managerial && !candidate.has_managerial_exp {
        gaps.push("missing managerial experience".to_string());
    }

    (components, reasons, gaps, total)
}
