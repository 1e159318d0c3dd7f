//! Loading the postings corpus produced by the external crawler

use crate::error::{Result, SkillMatchError};
use crate::processing::types::Posting;
use log::{info, warn};
use std::path::Path;
use tokio::fs;

/// Read a JSON array of postings from disk.
///
/// Postings without an id get their position as id so results stay
/// traceable back to the input file.
pub async fn load_postings(path: &Path) -> Result<Vec<Posting>> {
    if !path.exists() {
        return Err(SkillMatchError::InvalidInput(format!(
            "Postings file does not exist: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).await?;
    let postings = parse_postings(&content)?;
    info!("Loaded {} postings from {}", postings.len(), path.display());
    Ok(postings)
}

pub fn parse_postings(content: &str) -> Result<Vec<Posting>> {
    let mut postings: Vec<Posting> = serde_json::from_str(content)?;

    for (index, posting) in postings.iter_mut().enumerate() {
        if posting.id.trim().is_empty() {
            posting.id = index.to_string();
        }
    }

    if postings.is_empty() {
        warn!("Postings corpus is empty");
    }
    Ok(postings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assigns_missing_ids() {
        let postings = parse_postings(
            r#"[
                {"company": "Acme", "role": "Intern", "skills": ["python"]},
                {"id": "x9", "company": "Globex", "role": "Analyst", "description": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].id, "0");
        assert_eq!(postings[1].id, "x9");
        assert_eq!(postings[1].description(), "");
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse_postings("{not json"),
            Err(SkillMatchError::Serialization(_))
        ));
    }
}
