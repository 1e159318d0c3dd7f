//! Skill-based internship matching library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{Result, SkillMatchError};
pub use config::Config;
pub use processing::analyzer::rank_postings;
pub use processing::gap_analyzer::{analyze_gap, GapReport};
pub use processing::scorer::score_match;
pub use processing::skill_extractor::extract_skills;
pub use processing::types::{CandidateProfile, MatchFilters, MatchResult, Posting, SkillSet, SortKey};
