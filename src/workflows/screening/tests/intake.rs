use std::time::Duration;

use chrono::NaiveDate;

use crate::workflows::screening::intake::{CvExtractor, CvIntakeService, MockCvExtractor};

fn receipt_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 5).expect("valid date")
}

#[test]
fn seeded_extractors_are_deterministic() {
    let first = MockCvExtractor::seeded(42).extract("cv.pdf");
    let second = MockCvExtractor::seeded(42).extract("cv.pdf");
    assert_eq!(first, second);
}

#[test]
fn extracted_profiles_are_plausible() {
    let extractor = MockCvExtractor::seeded(7);

    for _ in 0..32 {
        let profile = extractor.extract("batch.pdf");

        assert!(!profile.name.is_empty());
        assert!(profile.email.contains('@'));
        assert!((4..=6).contains(&profile.skills.len()));
        assert!((1..=2).contains(&profile.industry.len()));
        assert!(!profile.is_spam);

        let years = profile.years_of_experience;
        match profile.current_level.as_str() {
            "Junior" => assert!((1..=2).contains(&years)),
            "Mid-Level" => assert!((3..=4).contains(&years)),
            "Senior" => assert!((5..=9).contains(&years)),
            other => panic!("unexpected level {other}"),
        }
        if profile.has_managerial_exp {
            assert_eq!(profile.current_level, "Senior");
        }
    }
}

#[tokio::test]
async fn zero_delay_ingest_returns_the_extraction() {
    let service = CvIntakeService::new(MockCvExtractor::seeded(11), Duration::ZERO);

    let record = service.ingest("uploaded-cv.pdf", receipt_date()).await;

    assert_eq!(record.file_name, "uploaded-cv.pdf");
    assert_eq!(record.received_on, receipt_date());
    assert_eq!(record.profile, MockCvExtractor::seeded(11).extract("uploaded-cv.pdf"));
}

#[tokio::test(start_paused = true)]
async fn ingest_applies_the_configured_delay() {
    let service = CvIntakeService::new(MockCvExtractor::seeded(3), Duration::from_millis(1500));

    let started = tokio::time::Instant::now();
    let record = service.ingest("slow-cv.pdf", receipt_date()).await;

    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(record.file_name, "slow-cv.pdf");
}
