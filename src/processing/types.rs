//! Core data model: skill sets, candidates, postings and match results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A set of normalized (trimmed, lower-cased) skill terms.
///
/// Membership is case-insensitive. Iteration is sorted so that anything
/// derived from a set (recommendation text, report output) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Normalize a raw term the same way every set member is normalized
    pub fn normalize(term: &str) -> String {
        term.trim().to_lowercase()
    }

    /// Insert a term, returning false for blanks and duplicates
    pub fn insert(&mut self, term: &str) -> bool {
        let normalized = Self::normalize(term);
        if normalized.is_empty() {
            return false;
        }
        self.0.insert(normalized)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(&Self::normalize(term))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    pub fn union(&self, other: &SkillSet) -> SkillSet {
        Self(self.0.union(&other.0).cloned().collect())
    }

    pub fn is_disjoint(&self, other: &SkillSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    pub fn is_subset(&self, other: &SkillSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// First `n` terms in sorted order
    pub fn take(&self, n: usize) -> Vec<&str> {
        self.iter().take(n).collect()
    }

    /// Comma-separated rendering used in report text
    pub fn join(&self, separator: &str) -> String {
        self.iter().collect::<Vec<_>>().join(separator)
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for term in iter {
            set.insert(term.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(terms: Vec<String>) -> Self {
        terms.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.0.into_iter().collect()
    }
}

impl fmt::Display for SkillSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(", "))
    }
}

/// The candidate side of a matching request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub skills: SkillSet,
    pub raw_text: Option<String>,
    pub preferred_role_keyword: Option<String>,
    pub preferred_work_mode: Option<String>,
}

impl CandidateProfile {
    /// Build a profile from an explicit skill list
    pub fn from_skills(skills: SkillSet) -> Self {
        Self {
            skills,
            ..Self::default()
        }
    }

    /// Build a profile from resume or pasted text, extracting its skills
    pub fn from_text(text: &str) -> Self {
        Self {
            skills: crate::processing::skill_extractor::extract_skills(text),
            raw_text: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn with_preferences(
        mut self,
        role_keyword: Option<String>,
        work_mode: Option<String>,
    ) -> Self {
        self.preferred_role_keyword = role_keyword;
        self.preferred_work_mode = work_mode;
        self
    }
}

/// A job or internship posting as materialized by the external crawler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    #[serde(default)]
    pub id: String,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "work_type")]
    pub work_mode: Option<String>,
    #[serde(default, alias = "skills")]
    pub declared_skills: SkillSet,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "salary")]
    pub compensation_text: Option<String>,
    #[serde(default)]
    pub apply_url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}

impl Posting {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn work_mode(&self) -> &str {
        self.work_mode.as_deref().unwrap_or("")
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    /// Free text scored against the candidate on the ranking path
    pub fn match_text(&self) -> String {
        format!("{} {}", self.description(), self.role)
    }
}

/// A posting that survived filtering, with its score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub posting: Posting,
    pub score: u8,
    pub matched_skills: SkillSet,
}

/// Multi-criteria filters applied before ranking
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchFilters {
    pub search_keyword: Option<String>,
    pub skills: SkillSet,
    pub work_mode: Option<String>,
    pub location: Option<String>,
    pub min_score: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Match,
    Recent,
    Salary,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "match" => Ok(SortKey::Match),
            "recent" => Ok(SortKey::Recent),
            "salary" => Ok(SortKey::Salary),
            _ => Err(format!("Invalid sort key: {}. Supported: match, recent, salary", s)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Match => "match",
            SortKey::Recent => "recent",
            SortKey::Salary => "salary",
        };
        write!(f, "{}", name)
    }
}
