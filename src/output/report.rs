//! Report structures handed to the output formatters

use crate::processing::ats_scorer::ats_score;
use crate::processing::overview::MatchOverview;
use crate::processing::types::{MatchResult, SkillSet, SortKey};
use crate::processing::vocabulary::is_soft_skill;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::processing::gap_analyzer::GapReport;

/// Ranked recommendations for one candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub generated_at: DateTime<Utc>,
    pub candidate_skills: SkillSet,
    pub sort: SortKey,
    pub results: Vec<MatchResult>,
    pub overview: Option<MatchOverview>,
    /// Corpus size before filtering
    pub total_postings: usize,
    pub processing_time_ms: u64,
}

impl RankingReport {
    pub fn new(
        candidate_skills: SkillSet,
        sort: SortKey,
        results: Vec<MatchResult>,
        overview: Option<MatchOverview>,
        total_postings: usize,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            candidate_skills,
            sort,
            results,
            overview,
            total_postings,
            processing_time_ms,
        }
    }
}

/// Skills found in a single document plus its ATS readiness score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillProfileReport {
    pub source: String,
    pub skills: SkillSet,
    pub technical_skills: SkillSet,
    pub soft_skills: SkillSet,
    pub ats_score: u8,
    pub word_count: usize,
}

impl SkillProfileReport {
    pub fn from_text(source: &str, text: &str, skills: SkillSet) -> Self {
        let (soft, technical): (Vec<&str>, Vec<&str>) = skills.iter().partition(|s| is_soft_skill(s));
        Self {
            source: source.to_string(),
            technical_skills: technical.into_iter().collect(),
            soft_skills: soft.into_iter().collect(),
            ats_score: ats_score(text, &skills),
            word_count: text.split_whitespace().count(),
            skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::skill_extractor::extract_skills;

    #[test]
    fn test_skill_profile_splits_categories() {
        let text = "Skills: Python, Docker, leadership and teamwork";
        let report = SkillProfileReport::from_text("resume.txt", text, extract_skills(text));

        assert_eq!(report.technical_skills.join(","), "docker,python");
        assert_eq!(report.soft_skills.join(","), "leadership,teamwork");
        assert_eq!(report.skills.len(), 4);
        assert_eq!(report.word_count, 6);
        assert!(report.ats_score > 0);
    }

    #[test]
    fn test_ranking_report_serializes() {
        let report = RankingReport::new(
            ["python"].iter().collect(),
            SortKey::Recent,
            Vec::new(),
            None,
            0,
            3,
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sort"], "recent");
        assert_eq!(json["candidate_skills"][0], "python");
        assert!(json["results"].as_array().unwrap().is_empty());
    }
}
