//! Vocabulary-driven skill extraction from free text

use crate::processing::types::SkillSet;
use crate::processing::vocabulary::{is_short_term, SKILL_VOCABULARY};
use aho_corasick::AhoCorasick;
use log::debug;
use once_cell::sync::Lazy;

static SHORT_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    SKILL_VOCABULARY
        .iter()
        .copied()
        .filter(|term| is_short_term(term))
        .collect()
});

static LONG_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    SKILL_VOCABULARY
        .iter()
        .copied()
        .filter(|term| !is_short_term(term))
        .collect()
});

// Standard match kind so overlapping search reports every contained term,
// including ones nested inside longer terms ("java" in "javascript").
static LONG_TERM_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(LONG_TERMS.iter()).expect("skill vocabulary patterns are valid")
});

/// Extract the set of vocabulary skills mentioned in `text`.
///
/// Terms of two characters or fewer ("r", "go", "c#") must stand alone as a
/// word; longer terms match as plain substrings.
pub fn extract_skills(text: &str) -> SkillSet {
    let mut skills = SkillSet::new();
    if text.trim().is_empty() {
        return skills;
    }

    let lowered = text.to_lowercase();

    for mat in LONG_TERM_MATCHER.find_overlapping_iter(&lowered) {
        skills.insert(LONG_TERMS[mat.pattern().as_usize()]);
    }

    for term in SHORT_TERMS.iter() {
        if contains_word(&lowered, term) {
            skills.insert(term);
        }
    }

    debug!("Extracted {} skills from {} characters", skills.len(), text.len());
    skills
}

/// True when `term` occurs in `text` with no word character on either side
pub fn contains_word(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    text.match_indices(term).any(|(start, matched)| {
        let before = text[..start].chars().next_back();
        let after = text[start + matched.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
