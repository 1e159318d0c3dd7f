//! Document loading for resumes and job descriptions

use crate::error::{Result, SkillMatchError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{require_text, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Reads documents from disk, remembering extracted text per path
pub struct InputManager {
    documents: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Extract the raw text of a PDF, plain text or Markdown document
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(text) = self.documents.get(path) {
                debug!("Using cached text for: {}", path.display());
                return Ok(text.clone());
            }
        }

        if !path.exists() {
            return Err(SkillMatchError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = read_document(path, document_type(path)).await?;
        info!("Extracted {} characters from {}", text.len(), path.display());

        if self.enable_cache {
            self.documents.insert(path.to_path_buf(), text.clone());
        }
        Ok(text)
    }

    /// Extract trimmed text, failing when the document has no usable content
    pub async fn extract_non_empty(&mut self, path: &Path) -> Result<String> {
        let text = self.extract_text(path).await?;
        require_text(&text, || format!("No text could be extracted from {}", path.display()))
    }

    pub fn clear_cache(&mut self) {
        self.documents.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.documents.len()
    }
}

fn document_type(path: &Path) -> FileType {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(FileType::from_filename)
        .unwrap_or(FileType::Unknown)
}

async fn read_document(path: &Path, file_type: FileType) -> Result<String> {
    match file_type {
        FileType::Pdf => PdfExtractor.extract(path).await,
        FileType::Text => PlainTextExtractor.extract(path).await,
        // headings and emphasis are flattened to plain lines
        FileType::Markdown => MarkdownExtractor.extract(path).await,
        FileType::Unknown => Err(SkillMatchError::UnsupportedFormat(format!(
            "Unsupported file type for: {} (expected .pdf, .txt or .md)",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_from_path() {
        assert_eq!(document_type(Path::new("docs/cv.final.PDF")), FileType::Pdf);
        assert_eq!(document_type(Path::new("jd.markdown")), FileType::Markdown);
        assert_eq!(document_type(Path::new("README")), FileType::Unknown);
    }

    #[tokio::test]
    async fn test_extension_less_file_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume");
        std::fs::write(&path, "Python").unwrap();

        let mut manager = InputManager::new();
        assert!(matches!(
            manager.extract_text(&path).await,
            Err(SkillMatchError::UnsupportedFormat(_))
        ));
        assert_eq!(manager.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_non_empty_text_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "\n  Python and SQL  \n").unwrap();

        let mut manager = InputManager::new();
        assert_eq!(manager.extract_non_empty(&path).await.unwrap(), "Python and SQL");
        assert_eq!(manager.cache_size(), 1);
    }
}
