use std::sync::Mutex;
use std::time::Duration;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{Candidate, CandidateId, CvQuality};

/// Structured fields pulled out of an uploaded CV, before the profile is
/// admitted into the candidate pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedCv {
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

impl ExtractedCv {
    pub fn into_candidate(self, id: CandidateId) -> Candidate {
        Candidate {
            id,
            name: self.name,
            email: self.email,
            years_of_experience: self.years_of_experience,
            current_level: self.current_level,
            has_managerial_exp: self.has_managerial_exp,
            industry: self.industry,
            skills: self.skills,
            last_position: self.last_position,
            education: self.education,
            is_spam: self.is_spam,
            cv_quality: self.cv_quality,
        }
    }
}

/// Result of one simulated upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub file_name: String,
    pub received_on: NaiveDate,
    pub profile: ExtractedCv,
}

/// Extraction seam so a real parser can replace the mock without touching
/// the intake service or its callers.
pub trait CvExtractor: Send + Sync {
    fn extract(&self, file_name: &str) -> ExtractedCv;
}

const FIRST_NAMES: &[&str] = &[
    "Putri", "Agus", "Maya", "Hendra", "Lina", "Fajar", "Intan", "Yusuf",
];
const LAST_NAMES: &[&str] = &[
    "Saputra", "Wulandari", "Prasetyo", "Anggraini", "Gunawan", "Rahmawati",
];
const SKILL_POOL: &[&str] = &[
    "Python",
    "Django",
    "PostgreSQL",
    "REST API",
    "Docker",
    "AWS",
    "Kubernetes",
    "Redis",
    "MySQL",
    "Git",
    "Microservices",
    "RabbitMQ",
];
const INDUSTRY_POOL: &[&str] = &[
    "Banking",
    "Fintech",
    "E-commerce",
    "Insurance",
    "Technology",
    "Startup",
];
const EMPLOYERS: &[&str] = &[
    "Bank Nusantara",
    "TokoCepat",
    "FinEdge",
    "Garuda Digital",
    "Sentosa Tech",
];
const SCHOOLS: &[&str] = &[
    "S1 Computer Science - UI",
    "S1 Informatics - UGM",
    "S1 Information Systems - Binus",
    "S2 Computer Science - ITB",
];

/// Fake extractor producing plausible, randomized profiles. Seedable so
/// tests can pin the output.
pub struct MockCvExtractor {
    rng: Mutex<StdRng>,
}

impl MockCvExtractor {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for MockCvExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CvExtractor for MockCvExtractor {
    fn extract(&self, _file_name: &str) -> ExtractedCv {
        let mut guard = self.rng.lock().expect("extractor rng poisoned");
        let rng = &mut *guard;

        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let name = format!("{first} {last}");
        let email = format!(
            "{}.{}@email.com",
            first.to_lowercase(),
            last.to_lowercase()
        );

        let (current_level, years_of_experience) = match rng.gen_range(0..3) {
            0 => ("Junior", rng.gen_range(1..=2)),
            1 => ("Mid-Level", rng.gen_range(3..=4)),
            _ => ("Senior", rng.gen_range(5..=9)),
        };
        let has_managerial_exp = current_level == "Senior" && rng.gen_bool(0.5);

        let skill_count = rng.gen_range(4..=6);
        let skills: Vec<String> = SKILL_POOL
            .choose_multiple(rng, skill_count)
            .map(|skill| skill.to_string())
            .collect();

        let industry_count = rng.gen_range(1..=2);
        let industry: Vec<String> = INDUSTRY_POOL
            .choose_multiple(rng, industry_count)
            .map(|label| label.to_string())
            .collect();

        let employer = EMPLOYERS[rng.gen_range(0..EMPLOYERS.len())];
        let last_position = format!("{current_level} Backend Engineer at {employer}");
        let education = SCHOOLS[rng.gen_range(0..SCHOOLS.len())].to_string();

        let cv_quality = if rng.gen_bool(0.3) {
            CvQuality::High
        } else {
            CvQuality::Medium
        };

        ExtractedCv {
            name,
            email,
            years_of_experience,
            current_level: current_level.to_string(),
            has_managerial_exp,
            industry,
            skills,
            last_position,
            education,
            is_spam: false,
            cv_quality,
        }
    }
}

/// Simulated upload pipeline: an artificial delay followed by the
/// extractor's output. No cancellation semantics; the delay is short and
/// has no side effects to undo.
pub struct CvIntakeService<E> {
    extractor: E,
    delay: Duration,
}

impl<E: CvExtractor> CvIntakeService<E> {
    pub fn new(extractor: E, delay: Duration) -> Self {
        Self { extractor, delay }
    }

    pub async fn ingest(&self, file_name: &str, received_on: NaiveDate) -> IntakeRecord {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let profile = self.extractor.extract(file_name);
        info!(file = %file_name, candidate = %profile.name, "mock cv extraction complete");

        IntakeRecord {
            file_name: file_name.to_string(),
            received_on,
            profile,
        }
    }
}
