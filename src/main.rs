use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use smart_match::config::AppConfig;
use smart_match::error::AppError;
use smart_match::telemetry;
use smart_match::workflows::screening::{
    CandidateId, CandidateScoreView, Catalog, CompanyId, CvIntakeService, JobId, MatchBand,
    MatchEngine, MockCvExtractor, PipelineStats, ScreeningSession, SearchScope, SortKey,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Smart Job Matcher",
    about = "Score sample candidates against open positions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the candidate pool for a selected opening (default command)
    Report(ReportArgs),
    /// Compare two or three candidates side by side
    Compare(CompareArgs),
    /// Run the simulated CV upload flow and score the extracted profile
    Upload(UploadArgs),
}

#[derive(Args, Debug, Default)]
struct ReportArgs {
    /// Company to inspect (defaults to the first in the catalog)
    #[arg(long)]
    company: Option<u32>,
    /// Opening to score against (defaults to the company's first job)
    #[arg(long)]
    job: Option<u32>,
    /// Sort order for the candidate list (score or experience)
    #[arg(long, value_parser = parse_sort)]
    sort: Option<SortKey>,
    /// Free-text filter over the candidate pool
    #[arg(long)]
    search: Option<String>,
    /// Which candidate fields the search inspects
    #[arg(long, value_parser = parse_scope)]
    scope: Option<SearchScope>,
    /// Print gap analysis lines under each candidate
    #[arg(long)]
    show_gaps: bool,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Candidate ids to compare, comma separated (two or three)
    #[arg(long, value_delimiter = ',', required = true)]
    candidates: Vec<u32>,
    #[arg(long)]
    company: Option<u32>,
    #[arg(long)]
    job: Option<u32>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct UploadArgs {
    /// File name to feed the mock extractor
    file_name: String,
    /// Receipt date for the upload (defaults to today)
    #[arg(long, value_parser = parse_date)]
    received_on: Option<NaiveDate>,
    /// Seed for the mock extractor, for reproducible demos
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    company: Option<u32>,
    #[arg(long)]
    job: Option<u32>,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ReportResponse {
    company: String,
    job_title: String,
    candidates: Vec<CandidateScoreView>,
    stats: PipelineStats,
}

#[derive(Debug, Serialize)]
struct CompareResponse {
    job_title: String,
    ranked: Vec<CandidateScoreView>,
    justifications: Vec<String>,
}

#[derive(Debug, Serialize)]
struct UploadResponse {
    file_name: String,
    received_on: NaiveDate,
    candidate: CandidateScoreView,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Report(ReportArgs::default()));

    match command {
        Command::Report(args) => run_report(args),
        Command::Compare(args) => run_compare(args),
        Command::Upload(args) => run_upload(args, &config).await,
    }
}

fn parse_sort(raw: &str) -> Result<SortKey, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "score" => Ok(SortKey::Score),
        "experience" | "exp" => Ok(SortKey::Experience),
        other => Err(format!(
            "unknown sort key '{other}' (expected score or experience)"
        )),
    }
}

fn parse_scope(raw: &str) -> Result<SearchScope, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(SearchScope::All),
        "skills" => Ok(SearchScope::Skills),
        "experience" => Ok(SearchScope::Experience),
        "industry" => Ok(SearchScope::Industry),
        other => Err(format!(
            "unknown scope '{other}' (expected all, skills, experience, or industry)"
        )),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn build_session(company: Option<u32>, job: Option<u32>) -> Result<ScreeningSession, AppError> {
    let mut session = ScreeningSession::new(Catalog::sample(), MatchEngine::default())?;
    if let Some(id) = company {
        session.select_company(CompanyId(id))?;
    }
    if let Some(id) = job {
        session.select_job(JobId(id))?;
    }
    Ok(session)
}

fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let mut session = build_session(args.company, args.job)?;
    session.set_sort(args.sort.unwrap_or(SortKey::Score));
    if let Some(query) = args.search {
        session.set_search(query, args.scope.unwrap_or(SearchScope::All));
    }

    let ranked = session.rank();
    let stats = session.stats();
    info!(
        company = %session.current_company().name,
        job = %session.current_job().title,
        shown = ranked.len(),
        "pipeline report generated"
    );

    if args.json {
        let response = ReportResponse {
            company: session.current_company().name.clone(),
            job_title: session.current_job().title.clone(),
            candidates: ranked.iter().map(CandidateScoreView::from).collect(),
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let company = session.current_company();
    let job = session.current_job();
    println!("Smart job matcher demo");
    println!("Company: {} ({})", company.name, company.description);
    println!(
        "Opening: {} | {} | {}-{} years | {} level{}",
        job.title,
        job.location,
        job.min_experience,
        job.max_experience,
        job.required_level,
        if job.must_have_managerial {
            " | managerial required"
        } else {
            ""
        }
    );

    println!("\nCandidates ({} shown)", ranked.len());
    for entry in &ranked {
        let view = CandidateScoreView::from(entry);
        let spam_tag = if view.is_spam { " [SPAM]" } else { "" };
        println!(
            "- [{:>3}% {}] {}{}, {} yrs, {}",
            view.score,
            view.band_label,
            view.name,
            spam_tag,
            view.years_of_experience,
            view.last_position
        );
        if args.show_gaps {
            for gap in &view.gaps {
                println!("    gap: {gap}");
            }
        } else if !view.gaps.is_empty() {
            println!("    {} gap(s) found", view.gaps.len());
        }
    }

    println!("\nPipeline bands ({} candidates)", stats.total);
    for band in &stats.bands {
        println!("- {}: {} ({:.1}%)", band.band_label, band.count, band.pct);
    }
    println!(
        "Spam profiles: {} ({} strong, held for manual review)",
        stats.spam_count, stats.flagged_strong
    );

    Ok(())
}

fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let mut session = build_session(args.company, args.job)?;
    for id in &args.candidates {
        session.toggle_compare(CandidateId(*id))?;
    }

    let insights = session.compare()?;
    let job_title = session.current_job().title.clone();

    if args.json {
        let response = CompareResponse {
            job_title,
            ranked: insights.ranked.iter().map(CandidateScoreView::from).collect(),
            justifications: insights.justifications.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("Comparison for {job_title}");
    for (position, entry) in insights.ranked.iter().enumerate() {
        println!(
            "{}. {} with {}% ({})",
            position + 1,
            entry.candidate.name,
            entry.report.score,
            entry.band().label()
        );
    }

    println!("\nWhy {}", insights.top().candidate.name);
    for line in &insights.justifications {
        println!("- {line}");
    }

    Ok(())
}

async fn run_upload(args: UploadArgs, config: &AppConfig) -> Result<(), AppError> {
    let mut session = build_session(args.company, args.job)?;

    let extractor = match args.seed {
        Some(seed) => MockCvExtractor::seeded(seed),
        None => MockCvExtractor::new(),
    };
    let intake = CvIntakeService::new(extractor, config.intake.upload_delay());

    let received_on = args
        .received_on
        .unwrap_or_else(|| Local::now().date_naive());
    println!("Processing {} (simulated parsing delay)...", args.file_name);
    let record = intake.ingest(&args.file_name, received_on).await;

    let id = session.admit(record.profile.clone());
    let entry = session.report_for(id)?;
    let view = CandidateScoreView::from(&entry);

    if args.json {
        let response = UploadResponse {
            file_name: record.file_name,
            received_on: record.received_on,
            candidate: view,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "Extracted: {}, {} yrs, {} ({})",
        record.profile.name,
        record.profile.years_of_experience,
        record.profile.current_level,
        record.profile.skills.join(", ")
    );
    println!("Admitted as {id} (received {})", record.received_on);
    println!(
        "Score for {}: {}% ({})",
        session.current_job().title,
        view.score,
        MatchBand::from_score(view.score).label()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_and_scope_parsers_accept_known_values() {
        assert_eq!(parse_sort("Score").expect("parses"), SortKey::Score);
        assert_eq!(parse_sort("exp").expect("parses"), SortKey::Experience);
        assert!(parse_sort("alphabetical").is_err());

        assert_eq!(parse_scope("skills").expect("parses"), SearchScope::Skills);
        assert!(parse_scope("emails").is_err());
    }

    #[test]
    fn date_parser_matches_report_format() {
        let date = parse_date("2026-08-05").expect("parses");
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 5).expect("valid"));
        assert!(parse_date("08/05/2026").is_err());
    }
}
