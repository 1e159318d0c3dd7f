//! Corpus-wide match statistics for a candidate

use crate::processing::scorer::score_match;
use crate::processing::types::{Posting, SkillSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOverview {
    pub average_score: u8,
    pub top_score: u8,
    pub above_80: usize,
    pub above_60: usize,
    pub total_postings: usize,
}

/// Summarize raw (unfiltered, un-boosted) scores over the whole corpus.
///
/// Returns None when there is nothing to summarize.
pub fn match_overview(postings: &[Posting], candidate_skills: &SkillSet) -> Option<MatchOverview> {
    if postings.is_empty() || candidate_skills.is_empty() {
        return None;
    }

    let scores: Vec<u8> = postings
        .iter()
        .map(|posting| {
            let text = format!("{} {}", posting.match_text(), posting.company);
            score_match(candidate_skills, &posting.declared_skills, &text)
        })
        .collect();

    let total: usize = scores.iter().map(|&s| s as usize).sum();
    let count = scores.len();

    Some(MatchOverview {
        average_score: ((2 * total + count) / (2 * count)) as u8,
        top_score: scores.iter().copied().max().unwrap_or(0),
        above_80: scores.iter().filter(|&&s| s >= 80).count(),
        above_60: scores.iter().filter(|&&s| s >= 60).count(),
        total_postings: count,
    })
}
