use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for candidates in the working pool.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CandidateId(pub u32);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cand-{:03}", self.0)
    }
}

/// Identifier wrapper for job openings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct JobId(pub u32);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job-{:03}", self.0)
    }
}

/// Identifier wrapper for hiring companies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CompanyId(pub u32);

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "co-{:03}", self.0)
    }
}

/// Pre-assigned sample quality label for a CV. Only `Low` affects scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CvQuality {
    High,
    Medium,
    Low,
    Suspicious,
}

impl CvQuality {
    pub const fn label(self) -> &'static str {
        match self {
            CvQuality::High => "high",
            CvQuality::Medium => "medium",
            CvQuality::Low => "low",
            CvQuality::Suspicious => "suspicious",
        }
    }
}

/// One required skill with its independent rubric weight.
///
/// Weights are applied as given; a job whose weights sum past 1.0 simply
/// overshoots the skills budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub name: String,
    pub weight: f64,
}

/// Requirements for one advertised opening. Static configuration, loaded
/// once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub min_experience: u8,
    pub max_experience: u8,
    pub required_skills: Vec<SkillRequirement>,
    pub required_industry: Vec<String>,
    pub required_level: String,
    pub must_have_managerial: bool,
}

/// A candidate profile from the sample pool or the mock upload flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub years_of_experience: u8,
    pub current_level: String,
    pub has_managerial_exp: bool,
    pub industry: Vec<String>,
    pub skills: Vec<String>,
    pub last_position: String,
    pub education: String,
    pub is_spam: bool,
    pub cv_quality: CvQuality,
}

/// A hiring company with its open positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub jobs: Vec<JobRequirement>,
}
