//! Skill extraction, scoring, filtering and ranking

pub mod types;
pub mod vocabulary;
pub mod skill_extractor;
pub mod scorer;
pub mod filter;
pub mod ranker;
pub mod gap_analyzer;
pub mod ats_scorer;
pub mod overview;
pub mod analyzer;
