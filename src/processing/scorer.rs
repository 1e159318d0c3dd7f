//! Skill-overlap relevance scoring between a candidate and a posting

use crate::processing::types::{Posting, SkillSet};

/// Score returned when nothing is known about what a posting needs.
pub const NEUTRAL_SCORE: u8 = 40;

pub const ROLE_BOOST: u8 = 15;
pub const WORK_MODE_BOOST: u8 = 5;

/// Posting skills plus every candidate skill mentioned in the posting text.
pub fn effective_posting_skills(
    candidate_skills: &SkillSet,
    posting_skills: &SkillSet,
    posting_text: &str,
) -> SkillSet {
    let text = posting_text.to_lowercase();
    let mentioned: SkillSet = candidate_skills
        .iter()
        .filter(|skill| text.contains(skill))
        .collect();
    posting_skills.union(&mentioned)
}

/// Percentage of the posting's effective skills the candidate covers.
///
/// Extra candidate skills do not lower the score. A posting with no skill
/// signal at all scores [`NEUTRAL_SCORE`].
pub fn score_match(candidate_skills: &SkillSet, posting_skills: &SkillSet, posting_text: &str) -> u8 {
    let effective = effective_posting_skills(candidate_skills, posting_skills, posting_text);
    if effective.is_empty() {
        return NEUTRAL_SCORE;
    }
    let covered = candidate_skills.intersection(&effective).len();
    percentage(covered, effective.len())
}

/// round(100 * part / whole), half away from zero, clamped to 100
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let rounded = (200 * part + whole) / (2 * whole);
    rounded.min(100) as u8
}

/// round(100 * part / whole) with exact halves going to the even neighbour,
/// clamped to 100. Used for gap scores, so 1/8 reads as 12 and 3/8 as 38.
pub fn percentage_half_even(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let quotient = 100 * part / whole;
    let twice_remainder = 2 * (100 * part % whole);
    let rounded = if twice_remainder > whole || (twice_remainder == whole && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    rounded.min(100) as u8
}

/// Apply preference boosts to a base score.
///
/// Each boost clamps the running total at 100, so the result is never
/// below `score` and never above 100.
pub fn boost(
    score: u8,
    posting: &Posting,
    preferred_role_keyword: Option<&str>,
    preferred_work_mode: Option<&str>,
) -> u8 {
    let mut boosted = score.min(100);

    if let Some(keyword) = non_empty_lower(preferred_role_keyword) {
        if posting.role.to_lowercase().contains(&keyword)
            || posting.description().to_lowercase().contains(&keyword)
        {
            boosted = boosted.saturating_add(ROLE_BOOST).min(100);
        }
    }

    if let Some(mode) = non_empty_lower(preferred_work_mode) {
        if posting.work_mode().to_lowercase().contains(&mode) {
            boosted = boosted.saturating_add(WORK_MODE_BOOST).min(100);
        }
    }

    boosted
}

fn non_empty_lower(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(terms: &[&str]) -> SkillSet {
        terms.iter().collect()
    }

    fn posting(role: &str, work_mode: Option<&str>, description: Option<&str>) -> Posting {
        Posting {
            id: "p".to_string(),
            company: "Acme".to_string(),
            role: role.to_string(),
            location: None,
            work_mode: work_mode.map(str::to_string),
            declared_skills: SkillSet::new(),
            description: description.map(str::to_string),
            compensation_text: None,
            apply_url: None,
            source: None,
            posted_at: None,
        }
    }

    #[test]
    fn test_recall_score() {
        let score = score_match(&skills(&["python", "sql"]), &skills(&["python", "java", "sql"]), "");
        assert_eq!(score, 67);
    }

    #[test]
    fn test_extra_candidate_skills_not_penalized() {
        let score = score_match(
            &skills(&["python", "sql", "figma", "kotlin"]),
            &skills(&["python", "sql"]),
            "",
        );
        assert_eq!(score, 100);
    }

    #[test]
    fn test_neutral_score_without_signal() {
        assert_eq!(score_match(&skills(&["python"]), &SkillSet::new(), ""), NEUTRAL_SCORE);
        assert_eq!(score_match(&SkillSet::new(), &SkillSet::new(), ""), NEUTRAL_SCORE);
        assert_eq!(
            score_match(&skills(&["python"]), &SkillSet::new(), "Marketing intern"),
            NEUTRAL_SCORE
        );
    }

    #[test]
    fn test_text_recovers_skills() {
        // no declared skills, but the description mentions one candidate skill
        let score = score_match(&skills(&["python", "excel"]), &SkillSet::new(), "Work with PYTHON daily");
        assert_eq!(score, 100);

        let score = score_match(&skills(&["python"]), &skills(&["java"]), "python preferred");
        assert_eq!(score, 50);
    }

    #[test]
    fn test_score_is_case_insensitive() {
        let candidate: SkillSet = ["Python", "SQL"].iter().collect();
        let declared: SkillSet = ["PYTHON", "sql"].iter().collect();
        assert_eq!(score_match(&candidate, &declared, ""), 100);
    }

    #[test]
    fn test_score_bounds() {
        let candidate = skills(&["a", "b"]);
        for declared in [skills(&[]), skills(&["a"]), skills(&["c", "d", "e"])] {
            let score = score_match(&candidate, &declared, "");
            assert!(score <= 100);
        }
        assert_eq!(score_match(&skills(&[]), &skills(&["c"]), ""), 0);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_percentage_half_even() {
        assert_eq!(percentage_half_even(1, 8), 12);
        assert_eq!(percentage_half_even(3, 8), 38);
        assert_eq!(percentage_half_even(5, 8), 62);
        assert_eq!(percentage_half_even(1, 3), 33);
        assert_eq!(percentage_half_even(2, 3), 67);
        assert_eq!(percentage_half_even(1, 2), 50);
        assert_eq!(percentage_half_even(4, 4), 100);
        assert_eq!(percentage_half_even(0, 0), 0);
    }

    #[test]
    fn test_role_and_mode_boosts() {
        let p = posting("Python Developer Intern", Some("Work From Home"), None);
        assert_eq!(boost(50, &p, Some("developer"), None), 65);
        assert_eq!(boost(50, &p, None, Some("work from home")), 55);
        assert_eq!(boost(50, &p, Some("Developer"), Some("HOME")), 70);
        assert_eq!(boost(50, &p, Some("designer"), Some("office")), 50);
    }

    #[test]
    fn test_role_boost_matches_description() {
        let p = posting("Intern", None, Some("You will help the data science team"));
        assert_eq!(boost(40, &p, Some("data science"), None), 55);
    }

    #[test]
    fn test_empty_preferences_do_not_boost() {
        let p = posting("Developer", Some("Remote"), None);
        assert_eq!(boost(30, &p, Some("  "), Some("")), 30);
        assert_eq!(boost(30, &p, None, None), 30);
    }

    #[test]
    fn test_boost_is_monotone_and_capped() {
        let p = posting("Developer", Some("Remote"), Some("developer role"));
        for score in [0u8, 40, 85, 95, 100] {
            let boosted = boost(score, &p, Some("developer"), Some("remote"));
            assert!(boosted >= score);
            assert!(boosted <= 100);
        }
        assert_eq!(boost(90, &p, Some("developer"), Some("remote")), 100);
    }
}
