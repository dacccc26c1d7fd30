use tracing::debug;

use super::catalog::Catalog;
use super::domain::{Candidate, CandidateId, Company, CompanyId, JobId, JobRequirement};
use super::intake::ExtractedCv;
use super::report::{
    build_comparison, filter_ranked, pipeline_stats, sort_ranked, ComparisonInsights,
    PipelineStats, RankedCandidate, SearchScope, SortKey,
};
use super::rubric::MatchEngine;

/// Upper bound on the side-by-side comparison set.
pub const MAX_COMPARE: usize = 3;

/// Error raised by session state transitions.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("catalog has no companies with open positions")]
    EmptyCatalog,
    #[error("unknown company {0}")]
    UnknownCompany(CompanyId),
    #[error("{0} is not an opening at the selected company")]
    JobNotOpen(JobId),
    #[error("unknown candidate {0}")]
    UnknownCandidate(CandidateId),
    #[error("comparison is limited to three candidates")]
    CompareFull,
    #[error("comparison needs two or three candidates, {selected} selected")]
    CompareSelection { selected: usize },
}

/// In-memory presentation state: the current company/job/candidate
/// selection, search and sort settings, the comparison set, and any
/// profiles admitted through the mock upload flow.
///
/// Every derived view recomputes match reports from scratch against the
/// selected job; nothing is cached between calls. State resets with the
/// process.
pub struct ScreeningSession {
    catalog: Catalog,
    engine: MatchEngine,
    company_index: usize,
    job_index: usize,
    selected_candidate: Option<CandidateId>,
    sort: SortKey,
    query: String,
    scope: SearchScope,
    compare: Vec<CandidateId>,
    admitted: Vec<Candidate>,
    next_candidate_id: u32,
}

impl ScreeningSession {
    /// Opens a session on the first company and its first opening,
    /// mirroring the initial UI selection.
    pub fn new(catalog: Catalog, engine: MatchEngine) -> Result<Self, SessionError> {
        let has_opening = catalog
            .companies
            .first()
            .map(|company| !company.jobs.is_empty())
            .unwrap_or(false);
        if !has_opening {
            return Err(SessionError::EmptyCatalog);
        }

        let next_candidate_id = catalog.max_candidate_id() + 1;
        Ok(Self {
            catalog,
            engine,
            company_index: 0,
            job_index: 0,
            selected_candidate: None,
            sort: SortKey::Score,
            query: String::new(),
            scope: SearchScope::All,
            compare: Vec::new(),
            admitted: Vec::new(),
            next_candidate_id,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_company(&self) -> &Company {
        &self.catalog.companies[self.company_index]
    }

    pub fn current_job(&self) -> &JobRequirement {
        &self.current_company().jobs[self.job_index]
    }

    pub fn selected_candidate(&self) -> Option<CandidateId> {
        self.selected_candidate
    }

    pub fn compare_set(&self) -> &[CandidateId] {
        &self.compare
    }

    /// Switches company, jumping to its first opening and clearing the
    /// candidate focus.
    pub fn select_company(&mut self, id: CompanyId) -> Result<(), SessionError> {
        let index = self
            .catalog
            .companies
            .iter()
            .position(|company| company.id == id && !company.jobs.is_empty())
            .ok_or(SessionError::UnknownCompany(id))?;

        self.company_index = index;
        self.job_index = 0;
        self.selected_candidate = None;
        debug!(company = %id, "company selected");
        Ok(())
    }

    /// Switches to another opening of the selected company and clears the
    /// candidate focus.
    pub fn select_job(&mut self, id: JobId) -> Result<(), SessionError> {
        let index = self
            .current_company()
            .jobs
            .iter()
            .position(|job| job.id == id)
            .ok_or(SessionError::JobNotOpen(id))?;

        self.job_index = index;
        self.selected_candidate = None;
        debug!(job = %id, "job selected");
        Ok(())
    }

    pub fn select_candidate(&mut self, id: CandidateId) -> Result<(), SessionError> {
        if self.pool().all(|candidate| candidate.id != id) {
            return Err(SessionError::UnknownCandidate(id));
        }
        self.selected_candidate = Some(id);
        Ok(())
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
    }

    pub fn set_search(&mut self, query: impl Into<String>, scope: SearchScope) {
        self.query = query.into();
        self.scope = scope;
    }

    /// Adds the candidate to the comparison set, or removes it when
    /// already picked. Returns whether the candidate is now in the set.
    pub fn toggle_compare(&mut self, id: CandidateId) -> Result<bool, SessionError> {
        if let Some(position) = self.compare.iter().position(|picked| *picked == id) {
            self.compare.remove(position);
            return Ok(false);
        }

        if self.pool().all(|candidate| candidate.id != id) {
            return Err(SessionError::UnknownCandidate(id));
        }
        if self.compare.len() >= MAX_COMPARE {
            return Err(SessionError::CompareFull);
        }

        self.compare.push(id);
        Ok(true)
    }

    /// Scores the whole pool against the selected job, applies the search
    /// filter, and sorts by the active key. Recomputed on every call.
    pub fn rank(&self) -> Vec<RankedCandidate> {
        let scored = self.score_pool();
        let mut visible = filter_ranked(scored, &self.query, self.scope);
        sort_ranked(&mut visible, self.sort);
        visible
    }

    /// Pipeline statistics over the scored, unfiltered pool.
    pub fn stats(&self) -> PipelineStats {
        pipeline_stats(&self.score_pool())
    }

    /// Ranked comparison with justification text for the front-runner.
    /// Requires two or three picked candidates.
    pub fn compare(&self) -> Result<ComparisonInsights, SessionError> {
        if self.compare.len() < 2 || self.compare.len() > MAX_COMPARE {
            return Err(SessionError::CompareSelection {
                selected: self.compare.len(),
            });
        }

        let job = self.current_job();
        let mut picked = Vec::with_capacity(self.compare.len());
        for id in &self.compare {
            let candidate = self
                .pool()
                .find(|candidate| candidate.id == *id)
                .ok_or(SessionError::UnknownCandidate(*id))?;
            picked.push(RankedCandidate {
                report: self.engine.score(candidate, job),
                candidate: candidate.clone(),
            });
        }

        Ok(build_comparison(picked, job))
    }

    /// Match report for one candidate against the selected job, as shown
    /// in the detail pane.
    pub fn report_for(&self, id: CandidateId) -> Result<RankedCandidate, SessionError> {
        let job = self.current_job();
        let candidate = self
            .pool()
            .find(|candidate| candidate.id == id)
            .ok_or(SessionError::UnknownCandidate(id))?;
        Ok(RankedCandidate {
            report: self.engine.score(candidate, job),
            candidate: candidate.clone(),
        })
    }

    /// Admits a profile produced by the mock upload flow into the working
    /// pool and returns its assigned id.
    pub fn admit(&mut self, extracted: ExtractedCv) -> CandidateId {
        let id = CandidateId(self.next_candidate_id);
        self.next_candidate_id += 1;
        debug!(candidate = %id, name = %extracted.name, "admitted uploaded profile");
        self.admitted.push(extracted.into_candidate(id));
        id
    }

    fn pool(&self) -> impl Iterator<Item = &Candidate> {
        self.catalog.candidates.iter().chain(self.admitted.iter())
    }

    fn score_pool(&self) -> Vec<RankedCandidate> {
        let job = self.current_job();
        self.pool()
            .map(|candidate| RankedCandidate {
                report: self.engine.score(candidate, job),
                candidate: candidate.clone(),
            })
            .collect()
    }
}
