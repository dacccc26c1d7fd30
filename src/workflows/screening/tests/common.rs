use crate::workflows::screening::catalog::Catalog;
use crate::workflows::screening::domain::{
    Candidate, CandidateId, CvQuality, JobId, JobRequirement, SkillRequirement,
};
use crate::workflows::screening::report::RankedCandidate;
use crate::workflows::screening::rubric::{MatchEngine, MatchReport};
use crate::workflows::screening::session::ScreeningSession;

pub(super) fn engine() -> MatchEngine {
    MatchEngine::default()
}

pub(super) fn session() -> ScreeningSession {
    ScreeningSession::new(Catalog::sample(), engine()).expect("sample catalog has openings")
}

pub(super) fn skill(name: &str, weight: f64) -> SkillRequirement {
    SkillRequirement {
        name: name.to_string(),
        weight,
    }
}

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// The banking opening from the sample catalog, duplicated so rubric tests
/// can mutate requirements freely.
pub(super) fn banking_job() -> JobRequirement {
    JobRequirement {
        id: JobId(1),
        title: "Senior Backend Engineer - Banking Division".to_string(),
        company: "Pintar".to_string(),
        location: "Jakarta".to_string(),
        min_experience: 5,
        max_experience: 8,
        required_skills: vec![
            skill("Python", 0.3),
            skill("Django", 0.2),
            skill("PostgreSQL", 0.15),
            skill("REST API", 0.15),
            skill("Docker", 0.1),
            skill("AWS", 0.1),
        ],
        required_industry: strings(&["Banking", "Financial Services", "Fintech"]),
        required_level: "Senior".to_string(),
        must_have_managerial: true,
    }
}

/// A candidate matching every banking requirement.
pub(super) fn strong_candidate() -> Candidate {
    Candidate {
        id: CandidateId(1),
        name: "Ahmad Rizky".to_string(),
        email: "ahmad.rizky@email.com".to_string(),
        years_of_experience: 6,
        current_level: "Senior".to_string(),
        has_managerial_exp: true,
        industry: strings(&["Banking", "Fintech"]),
        skills: strings(&[
            "Python",
            "Django",
            "PostgreSQL",
            "REST API",
            "Docker",
            "AWS",
            "Redis",
        ]),
        last_position: "Senior Backend Engineer at Bank Mandiri".to_string(),
        education: "S1 Computer Science - UI".to_string(),
        is_spam: false,
        cv_quality: CvQuality::High,
    }
}

/// A junior profile missing every requirement, flagged low quality.
pub(super) fn junior_candidate() -> Candidate {
    Candidate {
        id: CandidateId(4),
        name: "John Doe".to_string(),
        email: "john.doe123@gmail.com".to_string(),
        years_of_experience: 1,
        current_level: "Junior".to_string(),
        has_managerial_exp: false,
        industry: strings(&["Freelance"]),
        skills: strings(&["HTML", "CSS", "JavaScript"]),
        last_position: "Freelance Web Developer".to_string(),
        education: "SMK Multimedia".to_string(),
        is_spam: true,
        cv_quality: CvQuality::Low,
    }
}

/// Ranked entry with a fabricated report, for view-layer tests that only
/// consume the score and flags.
pub(super) fn ranked_with_score(id: u32, score: u16, is_spam: bool) -> RankedCandidate {
    let mut candidate = strong_candidate();
    candidate.id = CandidateId(id);
    candidate.name = format!("Candidate {id}");
    candidate.is_spam = is_spam;
    RankedCandidate {
        candidate,
        report: MatchReport {
            score,
            components: Vec::new(),
            reasons: Vec::new(),
            gaps: Vec::new(),
            is_spam,
            cv_quality: CvQuality::Medium,
        },
    }
}
