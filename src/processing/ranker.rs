//! Ordering and truncation of scored matches

use crate::processing::types::{MatchResult, SortKey};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Reverse;

static FIRST_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d[\d,]*").expect("Invalid number regex")
});

/// Order matches by `sort` and keep at most `limit` of them.
///
/// All sorts are stable, so equal keys keep their input order.
pub fn rank(mut matches: Vec<MatchResult>, sort: SortKey, limit: usize) -> Vec<MatchResult> {
    match sort {
        SortKey::Match => matches.sort_by_key(|m| Reverse(m.score)),
        // None orders below every timestamp, so unknown dates land last
        SortKey::Recent => matches.sort_by_key(|m| Reverse(m.posting.posted_at)),
        SortKey::Salary => {
            matches.sort_by_cached_key(|m| {
                Reverse(salary_value(m.posting.compensation_text.as_deref().unwrap_or("")))
            })
        }
    }
    matches.truncate(limit);
    matches
}

/// First integer in a compensation string, 0 when there is none.
///
/// Thousands separators are dropped, so "₹10,000 /month" reads as 10000
/// and "$35-45/hr" as 35. Numbers too large for u64 saturate.
pub fn salary_value(text: &str) -> u64 {
    let Some(number) = FIRST_NUMBER.find(text) else {
        return 0;
    };
    number
        .as_str()
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |value, digit| {
            value.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::types::{Posting, SkillSet};
    use chrono::{TimeZone, Utc};

    fn result(id: &str, score: u8, salary: Option<&str>, day: Option<u32>) -> MatchResult {
        MatchResult {
            posting: Posting {
                id: id.to_string(),
                company: "Acme".to_string(),
                role: "Intern".to_string(),
                location: None,
                work_mode: None,
                declared_skills: SkillSet::new(),
                description: None,
                compensation_text: salary.map(str::to_string),
                apply_url: None,
                source: None,
                posted_at: day.map(|d| Utc.with_ymd_and_hms(2024, 5, d, 9, 0, 0).unwrap()),
            },
            score,
            matched_skills: SkillSet::new(),
        }
    }

    fn ids(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.posting.id.as_str()).collect()
    }

    #[test]
    fn test_match_sort_is_stable() {
        let input = vec![
            result("a", 50, None, None),
            result("b", 80, None, None),
            result("c", 50, None, None),
            result("d", 80, None, None),
        ];
        let ranked = rank(input, SortKey::Match, 10);
        assert_eq!(ids(&ranked), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_recent_sort_puts_unknown_dates_last() {
        let input = vec![
            result("a", 0, None, None),
            result("b", 0, None, Some(3)),
            result("c", 0, None, Some(20)),
        ];
        let ranked = rank(input, SortKey::Recent, 10);
        assert_eq!(ids(&ranked), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_salary_sort() {
        let input = vec![
            result("a", 0, Some("Unpaid"), None),
            result("b", 0, Some("$35-45/hr"), None),
            result("c", 0, Some("₹10,000 /month"), None),
            result("d", 0, None, None),
        ];
        let ranked = rank(input, SortKey::Salary, 10);
        assert_eq!(ids(&ranked), vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let input = (0..10).map(|i| result(&i.to_string(), i * 10, None, None)).collect();
        let ranked = rank(input, SortKey::Match, 3);
        assert_eq!(ids(&ranked), vec!["9", "8", "7"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(Vec::new(), SortKey::Recent, 5).is_empty());
    }

    #[test]
    fn test_salary_value() {
        assert_eq!(salary_value("$35-45/hr"), 35);
        assert_eq!(salary_value("₹ 15,000-20,000 /month"), 15000);
        assert_eq!(salary_value("Unpaid"), 0);
        assert_eq!(salary_value(""), 0);
    }

    #[test]
    fn test_oversized_salary_saturates() {
        assert_eq!(salary_value("₹99,999,999,999,999,999,999,999/month"), u64::MAX);

        let input = vec![
            result("a", 0, Some("₹20,000/month"), None),
            result("b", 0, Some("123456789012345678901234567890"), None),
        ];
        let ranked = rank(input, SortKey::Salary, 10);
        assert_eq!(ids(&ranked), vec!["b", "a"]);
    }
}
