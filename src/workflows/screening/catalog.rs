use serde::{Deserialize, Serialize};

use super::domain::{
    Candidate, CandidateId, Company, CompanyId, CvQuality, JobId, JobRequirement, SkillRequirement,
};

/// Immutable catalog of hiring companies, their openings, and the sample
/// candidate pool. Passed explicitly into the session so the scoring path
/// stays free of ambient module state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub companies: Vec<Company>,
    pub candidates: Vec<Candidate>,
}

impl Catalog {
    pub fn sample() -> Self {
        Self {
            companies: sample_companies(),
            candidates: sample_candidates(),
        }
    }

    pub fn company(&self, id: CompanyId) -> Option<&Company> {
        self.companies.iter().find(|company| company.id == id)
    }

    pub fn job(&self, id: JobId) -> Option<(&Company, &JobRequirement)> {
        self.companies.iter().find_map(|company| {
            company
                .jobs
                .iter()
                .find(|job| job.id == id)
                .map(|job| (company, job))
        })
    }

    pub fn candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| candidate.id == id)
    }

    /// Highest candidate id in the static pool, used to seed runtime ids
    /// for profiles admitted through the upload flow.
    pub fn max_candidate_id(&self) -> u32 {
        self.candidates
            .iter()
            .map(|candidate| candidate.id.0)
            .max()
            .unwrap_or(0)
    }
}

fn skill(name: &str, weight: f64) -> SkillRequirement {
    SkillRequirement {
        name: name.to_string(),
        weight,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn sample_companies() -> Vec<Company> {
    vec![
        Company {
            id: CompanyId(1),
            name: "Pintar".to_string(),
            description: "Digital banking platform".to_string(),
            logo: "🏦".to_string(),
            jobs: vec![
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
                },
                JobRequirement {
                    id: JobId(2),
                    title: "Backend Engineer - Payments".to_string(),
                    company: "Pintar".to_string(),
                    location: "Jakarta".to_string(),
                    min_experience: 2,
                    max_experience: 5,
                    required_skills: vec![
                        skill("Python", 0.3),
                        skill("REST API", 0.25),
                        skill("MySQL", 0.25),
                        skill("Git", 0.2),
                    ],
                    required_industry: strings(&["Fintech", "E-commerce", "Startup"]),
                    required_level: "Mid-Level".to_string(),
                    must_have_managerial: false,
                },
            ],
        },
        Company {
            id: CompanyId(2),
            name: "Toko Raya".to_string(),
            description: "Nationwide e-commerce marketplace".to_string(),
            logo: "🛒".to_string(),
            jobs: vec![JobRequirement {
                id: JobId(3),
                title: "Platform Engineer".to_string(),
                company: "Toko Raya".to_string(),
                location: "Bandung".to_string(),
                min_experience: 3,
                max_experience: 6,
                required_skills: vec![
                    skill("Kubernetes", 0.3),
                    skill("Docker", 0.25),
                    skill("AWS", 0.25),
                    skill("Microservices", 0.2),
                ],
                required_industry: strings(&["E-commerce", "Technology", "Startup"]),
                required_level: "Senior".to_string(),
                must_have_managerial: false,
            }],
        },
        Company {
            id: CompanyId(3),
            name: "Asuransi Prima".to_string(),
            description: "Insurance claims and policy platform".to_string(),
            logo: "🛡️".to_string(),
            jobs: vec![JobRequirement {
                id: JobId(4),
                title: "Engineering Lead - Claims Platform".to_string(),
                company: "Asuransi Prima".to_string(),
                location: "Jakarta".to_string(),
                min_experience: 6,
                max_experience: 10,
                required_skills: vec![
                    skill("Python", 0.25),
                    skill("PostgreSQL", 0.25),
                    skill("Microservices", 0.25),
                    skill("AWS", 0.25),
                ],
                required_industry: strings(&["Insurance", "Banking", "Financial Services"]),
                required_level: "Senior".to_string(),
                must_have_managerial: true,
            }],
        },
    ]
}

fn sample_candidates() -> Vec<Candidate> {
    vec![
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
        },
        Candidate {
            id: CandidateId(2),
            name: "Siti Nurhaliza".to_string(),
            email: "siti.n@email.com".to_string(),
            years_of_experience: 4,
            current_level: "Mid-Level".to_string(),
            has_managerial_exp: false,
            industry: strings(&["E-commerce", "Startup"]),
            skills: strings(&["Python", "Flask", "MySQL", "REST API", "Git"]),
            last_position: "Backend Developer at Tokopedia".to_string(),
            education: "S1 Information Systems - Binus".to_string(),
            is_spam: false,
            cv_quality: CvQuality::Medium,
        },
        Candidate {
            id: CandidateId(3),
            name: "Budi Santoso".to_string(),
            email: "budi.santoso@email.com".to_string(),
            years_of_experience: 8,
            current_level: "Senior".to_string(),
            has_managerial_exp: true,
            industry: strings(&["Banking", "Insurance"]),
            skills: strings(&[
                "Python",
                "Django",
                "PostgreSQL",
                "REST API",
                "Docker",
                "AWS",
                "Kubernetes",
                "Microservices",
            ]),
            last_position: "Tech Lead at BCA".to_string(),
            education: "S2 Computer Science - ITB".to_string(),
            is_spam: false,
            cv_quality: CvQuality::High,
        },
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
        },
        Candidate {
            id: CandidateId(5),
            name: "Dewi Lestari".to_string(),
            email: "dewi.lestari@email.com".to_string(),
            years_of_experience: 7,
            current_level: "Senior".to_string(),
            has_managerial_exp: false,
            industry: strings(&["Banking", "Financial Services"]),
            skills: strings(&["Python", "Django", "MongoDB", "REST API", "Docker"]),
            last_position: "Senior Software Engineer at Maybank".to_string(),
            education: "S1 Computer Engineering - ITS".to_string(),
            is_spam: false,
            cv_quality: CvQuality::High,
        },
        Candidate {
            id: CandidateId(6),
            name: "Spam User ABC".to_string(),
            email: "spamuser@fake.com".to_string(),
            years_of_experience: 0,
            current_level: "Entry".to_string(),
            has_managerial_exp: false,
            industry: Vec::new(),
            skills: strings(&["Microsoft Office", "Email"]),
            last_position: "Looking for any job".to_string(),
            education: "High School".to_string(),
            is_spam: true,
            cv_quality: CvQuality::Low,
        },
        Candidate {
            id: CandidateId(7),
            name: "Rina Wijaya".to_string(),
            email: "rina.wijaya@email.com".to_string(),
            years_of_experience: 5,
            current_level: "Senior".to_string(),
            has_managerial_exp: true,
            industry: strings(&["Fintech", "Technology"]),
            skills: strings(&[
                "Python",
                "Django",
                "PostgreSQL",
                "REST API",
                "Redis",
                "RabbitMQ",
            ]),
            last_position: "Backend Lead at Gojek".to_string(),
            education: "S1 Informatics - UGM".to_string(),
            is_spam: false,
            cv_quality: CvQuality::High,
        },
        // Flagged profile with genuinely strong credentials; kept visible
        // for manual review instead of being capped.
        Candidate {
            id: CandidateId(8),
            name: "Rudi Hartono".to_string(),
            email: "rudi.hartono@mailbox.example".to_string(),
            years_of_experience: 7,
            current_level: "Senior".to_string(),
            has_managerial_exp: true,
            industry: strings(&["Banking", "Fintech"]),
            skills: strings(&["Python", "Django", "PostgreSQL", "REST API", "Docker", "AWS"]),
            last_position: "Engineering Manager at Kas Kilat".to_string(),
            education: "S1 Computer Science - Unpad".to_string(),
            is_spam: true,
            cv_quality: CvQuality::Suspicious,
        },
    ]
}
