//! Matching engine coordinating filtering, scoring, ranking and overview

use crate::config::Config;
use crate::error::{Result, SkillMatchError};
use crate::output::report::RankingReport;
use crate::processing::filter::filter_postings;
use crate::processing::overview::match_overview;
use crate::processing::ranker::rank;
use crate::processing::types::{CandidateProfile, MatchFilters, MatchResult, Posting, SortKey};
use log::info;
use std::time::Instant;

/// Filter, score and order `postings` for `candidate`, keeping at most `limit`.
pub fn rank_postings(
    postings: &[Posting],
    candidate: &CandidateProfile,
    filters: &MatchFilters,
    sort: SortKey,
    limit: usize,
) -> Vec<MatchResult> {
    let matches = filter_postings(postings, candidate, filters);
    rank(matches, sort, limit)
}

/// Host-facing engine that applies configured defaults and bounds
pub struct MatchingEngine {
    config: Config,
}

/// Options for one ranking request; unset values fall back to config
#[derive(Debug, Clone, Default)]
pub struct RankingRequest {
    /// `filters.min_score` is replaced by `min_score` or the configured default
    pub filters: MatchFilters,
    /// Explicit threshold; `Some(0)` keeps every posting
    pub min_score: Option<u8>,
    pub sort: Option<SortKey>,
    pub limit: Option<usize>,
    pub include_overview: bool,
}

impl MatchingEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Apply standing preferences from config where the candidate has none
    pub fn apply_preferences(&self, mut candidate: CandidateProfile) -> CandidateProfile {
        let prefs = &self.config.preferences;
        if candidate.preferred_role_keyword.is_none() {
            candidate.preferred_role_keyword = prefs.role_keyword.clone();
        }
        if candidate.preferred_work_mode.is_none() {
            candidate.preferred_work_mode = prefs.work_mode.clone();
        }
        candidate
    }

    pub fn rank(
        &self,
        postings: &[Posting],
        candidate: &CandidateProfile,
        request: &RankingRequest,
    ) -> Result<RankingReport> {
        if request.limit == Some(0) {
            return Err(SkillMatchError::InvalidInput(
                "Result limit must be at least 1".to_string(),
            ));
        }
        if let Some(min_score) = request.min_score.filter(|&score| score > 100) {
            return Err(SkillMatchError::InvalidInput(format!(
                "Minimum score must be between 0 and 100, got {}",
                min_score
            )));
        }

        let start_time = Instant::now();
        let sort = request.sort.unwrap_or(self.config.ranking.default_sort);
        let limit = self.config.effective_limit(request.limit);

        let mut filters = request.filters.clone();
        if filters.location.is_none() {
            filters.location = self.config.preferences.location.clone();
        }
        filters.min_score = request.min_score.unwrap_or(self.config.ranking.min_score);

        let results = rank_postings(postings, candidate, &filters, sort, limit);
        let overview = if request.include_overview {
            match_overview(postings, &candidate.skills)
        } else {
            None
        };

        info!(
            "Ranked {} of {} postings by {} (limit {})",
            results.len(),
            postings.len(),
            sort,
            limit
        );

        Ok(RankingReport::new(
            candidate.skills.clone(),
            sort,
            results,
            overview,
            postings.len(),
            start_time.elapsed().as_millis() as u64,
        ))
    }
}
