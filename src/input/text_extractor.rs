//! Text extraction from various file formats

use crate::error::{Result, SkillMatchError};
use crate::input::file_detector::FileType;
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        pdf_to_text(&bytes).map_err(|e| {
            SkillMatchError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Extract text from an in-memory upload, dispatching on its filename.
///
/// The result is trimmed; an upload whose text is blank is reported as
/// invalid input so callers can ask for pasted text instead.
pub fn extract_text_from_bytes(bytes: &[u8], filename: &str) -> Result<String> {
    if bytes.is_empty() {
        return Err(SkillMatchError::InvalidInput("Uploaded file is empty".to_string()));
    }

    let text = match FileType::from_filename(filename) {
        FileType::Pdf => pdf_to_text(bytes)
            .map_err(|e| SkillMatchError::PdfExtraction(format!("Failed to extract text from '{}': {}", filename, e)))?,
        FileType::Text => String::from_utf8_lossy(bytes).into_owned(),
        FileType::Markdown => markdown_to_text(&String::from_utf8_lossy(bytes)),
        FileType::Unknown => {
            return Err(SkillMatchError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                filename
            )))
        }
    };

    require_text(&text, || {
        format!(
            "Could not extract text from '{}'. Try a different format or paste the text.",
            filename
        )
    })
}

/// Trimmed `text`, or `InvalidInput` carrying `message` when nothing is left
pub fn require_text(text: &str, message: impl FnOnce() -> String) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SkillMatchError::InvalidInput(message()));
    }
    Ok(trimmed.to_string())
}

fn pdf_to_text(bytes: &[u8]) -> std::result::Result<String, String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| e.to_string())
}

fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_to_text(&html_output)
}

fn html_to_text(html: &str) -> String {
    let text = html
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let clean_text = HTML_TAG.replace_all(&text, "");

    let lines: Vec<String> = clean_text
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}
