//! Heuristic ATS readiness score for a resume on its own

use crate::processing::types::SkillSet;

const SECTION_KEYWORDS: &[&str] = &["education", "experience", "projects", "skills", "summary", "objective"];

/// Score a resume 0-100 from content length, skill count, recognizable
/// section headings and overall word count.
pub fn ats_score(text: &str, skills: &SkillSet) -> u8 {
    let trimmed = text.trim();
    let mut score: usize = 0;

    score += match trimmed.chars().count() {
        n if n > 100 => 20,
        n if n > 0 => 10,
        _ => 0,
    };

    score += (skills.len() * 5).min(40);

    let lowered = trimmed.to_lowercase();
    let sections = SECTION_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count();
    score += (sections * 5).min(20);

    score += match text.split_whitespace().count() {
        200..=1000 => 20,
        0 => 0,
        _ => 10,
    };

    score.min(100) as u8
}
