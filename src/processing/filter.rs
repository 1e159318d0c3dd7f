//! Multi-criteria filter pipeline producing scored matches

use crate::processing::scorer::{boost, effective_posting_skills, score_match};
use crate::processing::types::{CandidateProfile, MatchFilters, MatchResult, Posting};
use log::{debug, warn};

/// Value meaning "no constraint" for the work-mode and location filters
pub const ALL_SENTINEL: &str = "all";

/// Run every posting through the filter stages, keeping input order.
///
/// Stages short-circuit on the first rejection so that scoring only runs
/// for postings that passed the cheap text predicates.
pub fn filter_postings(
    postings: &[Posting],
    candidate: &CandidateProfile,
    filters: &MatchFilters,
) -> Vec<MatchResult> {
    if candidate.skills.is_empty() {
        warn!("Candidate has no recognized skills; scores will rely on the neutral policy");
    }

    let results: Vec<MatchResult> = postings
        .iter()
        .filter(|posting| passes_keyword(posting, filters.search_keyword.as_deref()))
        .filter(|posting| passes_skill_filter(posting, filters))
        .filter(|posting| passes_work_mode(posting, filters.work_mode.as_deref()))
        .filter(|posting| passes_location(posting, filters.location.as_deref()))
        .filter_map(|posting| {
            let result = score_posting(posting, candidate);
            (result.score >= filters.min_score).then_some(result)
        })
        .collect();

    debug!("Filter pipeline kept {} of {} postings", results.len(), postings.len());
    results
}

/// Score one posting for a candidate, including preference boosts
pub fn score_posting(posting: &Posting, candidate: &CandidateProfile) -> MatchResult {
    let text = posting.match_text();
    let base = score_match(&candidate.skills, &posting.declared_skills, &text);
    let score = boost(
        base,
        posting,
        candidate.preferred_role_keyword.as_deref(),
        candidate.preferred_work_mode.as_deref(),
    );
    let effective = effective_posting_skills(&candidate.skills, &posting.declared_skills, &text);

    MatchResult {
        posting: posting.clone(),
        score,
        matched_skills: candidate.skills.intersection(&effective),
    }
}

fn passes_keyword(posting: &Posting, keyword: Option<&str>) -> bool {
    let Some(keyword) = active(keyword) else {
        return true;
    };
    [posting.role.as_str(), posting.company.as_str(), posting.description()]
        .iter()
        .any(|field| field.to_lowercase().contains(&keyword))
}

fn passes_skill_filter(posting: &Posting, filters: &MatchFilters) -> bool {
    if filters.skills.is_empty() {
        return true;
    }
    if !filters.skills.is_disjoint(&posting.declared_skills) {
        return true;
    }
    let text = posting.match_text().to_lowercase();
    filters.skills.iter().any(|skill| text.contains(skill))
}

fn passes_work_mode(posting: &Posting, work_mode: Option<&str>) -> bool {
    match active_field_filter(work_mode) {
        Some(mode) => posting.work_mode().to_lowercase().contains(&mode),
        None => true,
    }
}

fn passes_location(posting: &Posting, location: Option<&str>) -> bool {
    match active_field_filter(location) {
        Some(location) => posting.location().to_lowercase().contains(&location),
        None => true,
    }
}

fn active(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

fn active_field_filter(value: Option<&str>) -> Option<String> {
    active(value).filter(|v| v != ALL_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::scorer::NEUTRAL_SCORE;
    use crate::processing::types::SkillSet;

    fn posting(id: &str, role: &str, mode: &str, location: &str, skills: &[&str], description: &str) -> Posting {
        Posting {
            id: id.to_string(),
            company: format!("{} Corp", id),
            role: role.to_string(),
            location: Some(location.to_string()),
            work_mode: Some(mode.to_string()),
            declared_skills: skills.iter().collect(),
            description: Some(description.to_string()),
            compensation_text: None,
            apply_url: None,
            source: None,
            posted_at: None,
        }
    }

    fn corpus() -> Vec<Posting> {
        vec![
            posting("a", "Python Developer", "Remote", "Bangalore", &["python", "django"], "Backend APIs"),
            posting("b", "Frontend Intern", "In-office", "Mumbai", &["react", "css"], "Build UI in React"),
            posting("c", "Data Analyst", "Hybrid", "Delhi", &[], "Excel and SQL reporting"),
            posting("d", "Marketing Intern", "Remote", "Pune", &[], "Social media campaigns"),
        ]
    }

    fn candidate() -> CandidateProfile {
        CandidateProfile::from_skills(["python", "sql", "django"].iter().collect())
    }

    fn ids(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.posting.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_keeps_everything_in_order() {
        let results = filter_postings(&corpus(), &candidate(), &MatchFilters::default());
        assert_eq!(ids(&results), vec!["a", "b", "c", "d"]);
        assert_eq!(results[0].score, 100);
        assert_eq!(results[1].score, 0);
        assert_eq!(results[2].score, 100);
        assert_eq!(results[3].score, NEUTRAL_SCORE);
    }

    #[test]
    fn test_keyword_search_covers_role_company_description() {
        let filters = MatchFilters {
            search_keyword: Some("REACT".to_string()),
            ..MatchFilters::default()
        };
        assert_eq!(ids(&filter_postings(&corpus(), &candidate(), &filters)), vec!["b"]);

        let filters = MatchFilters {
            search_keyword: Some("d corp".to_string()),
            ..MatchFilters::default()
        };
        assert_eq!(ids(&filter_postings(&corpus(), &candidate(), &filters)), vec!["d"]);
    }

    #[test]
    fn test_skill_filter_uses_declared_skills_or_text() {
        let filters = MatchFilters {
            skills: ["css", "sql"].iter().collect(),
            ..MatchFilters::default()
        };
        // "b" declares css, "c" mentions sql in its description
        assert_eq!(ids(&filter_postings(&corpus(), &candidate(), &filters)), vec!["b", "c"]);
    }

    #[test]
    fn test_work_mode_and_location_filters() {
        let filters = MatchFilters {
            work_mode: Some("remote".to_string()),
            ..MatchFilters::default()
        };
        assert_eq!(ids(&filter_postings(&corpus(), &candidate(), &filters)), vec!["a", "d"]);

        let filters = MatchFilters {
            work_mode: Some("All".to_string()),
            location: Some("delhi".to_string()),
            ..MatchFilters::default()
        };
        assert_eq!(ids(&filter_postings(&corpus(), &candidate(), &filters)), vec!["c"]);
    }

    #[test]
    fn test_min_score_threshold() {
        let filters = MatchFilters {
            min_score: 41,
            ..MatchFilters::default()
        };
        assert_eq!(ids(&filter_postings(&corpus(), &candidate(), &filters)), vec!["a", "c"]);
    }

    #[test]
    fn test_filters_can_eliminate_everything() {
        let filters = MatchFilters {
            search_keyword: Some("blockchain".to_string()),
            ..MatchFilters::default()
        };
        assert!(filter_postings(&corpus(), &candidate(), &filters).is_empty());
        assert!(filter_postings(&[], &candidate(), &MatchFilters::default()).is_empty());
    }

    #[test]
    fn test_matched_skills_include_text_mentions() {
        let results = filter_postings(&corpus(), &candidate(), &MatchFilters::default());
        let c = &results[2];
        assert_eq!(c.matched_skills.join(","), "sql");
        for result in &results {
            assert!(result.matched_skills.is_subset(&candidate().skills));
        }
    }

    #[test]
    fn test_preferences_boost_scores() {
        let candidate = candidate().with_preferences(Some("intern".to_string()), Some("remote".to_string()));
        let results = filter_postings(&corpus(), &candidate, &MatchFilters::default());
        // "d": neutral 40 + role 15 + mode 5
        assert_eq!(results[3].score, 60);
        // "a": already 100, stays capped
        assert_eq!(results[0].score, 100);
    }

    #[test]
    fn test_result_set_independent_of_stage_order() {
        let filters = MatchFilters {
            skills: SkillSet::from(vec!["python".to_string()]),
            work_mode: Some("remote".to_string()),
            min_score: 50,
            ..MatchFilters::default()
        };
        let forward = filter_postings(&corpus(), &candidate(), &filters);

        let postings = corpus();
        let reversed: Vec<&str> = postings
            .iter()
            .filter(|p| score_posting(p, &candidate()).score >= filters.min_score)
            .filter(|p| passes_location(p, filters.location.as_deref()))
            .filter(|p| passes_work_mode(p, filters.work_mode.as_deref()))
            .filter(|p| passes_skill_filter(p, &filters))
            .filter(|p| passes_keyword(p, filters.search_keyword.as_deref()))
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids(&forward), reversed);
        assert_eq!(reversed, vec!["a"]);
    }
}
