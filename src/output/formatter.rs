//! Output formatters for ranking, gap and skill reports

use crate::config::OutputFormat;
use crate::error::{Result, SkillMatchError};
use crate::output::report::{GapReport, RankingReport, SkillProfileReport};
use crate::processing::types::{MatchResult, SkillSet};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering reports in one output format
pub trait OutputFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String>;
    fn format_gap(&self, report: &GapReport) -> Result<String>;
    fn format_skills(&self, report: &SkillProfileReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter
pub struct MarkdownFormatter {
    include_metadata: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            80..=100 => ("STRONG", Color::Green),
            60..=79 => ("GOOD", Color::BrightGreen),
            40..=59 => ("FAIR", Color::Yellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_skill_line(&self, label: &str, skills: &SkillSet, color: Color) -> String {
        let listed = if skills.is_empty() {
            "none".to_string()
        } else {
            skills.join(", ")
        };
        format!("{} ({}): {}\n", label, skills.len(), self.colorize(&listed, color))
    }

    fn format_match(&self, index: usize, result: &MatchResult) -> String {
        let posting = &result.posting;
        let mut output = format!(
            "{}. {} at {} {}% {}\n",
            index + 1,
            self.colorize(&posting.role, Color::Cyan),
            posting.company,
            result.score,
            self.format_score_badge(result.score)
        );

        let mut details = Vec::new();
        if let Some(location) = &posting.location {
            details.push(format!("📍 {}", location));
        }
        if let Some(mode) = &posting.work_mode {
            details.push(format!("🏠 {}", mode));
        }
        if let Some(salary) = &posting.compensation_text {
            details.push(format!("💰 {}", salary));
        }
        if let Some(posted) = posting.posted_at {
            details.push(format!("🗓 {}", posted.format("%Y-%m-%d")));
        }
        if !details.is_empty() {
            output.push_str(&format!("   {}\n", details.join(" | ")));
        }
        if !result.matched_skills.is_empty() {
            output.push_str(&format!(
                "   Matched: {}\n",
                self.colorize(&result.matched_skills.join(", "), Color::Green)
            ));
        }
        if self.detailed {
            if let Some(url) = &posting.apply_url {
                output.push_str(&format!("   Apply: {}\n", url));
            }
            if let Some(source) = &posting.source {
                output.push_str(&format!("   Source: {}\n", source));
            }
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("🎯 INTERNSHIP RECOMMENDATIONS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.processing_time_ms
        ));
        output.push_str(&self.format_skill_line("Your skills", &report.candidate_skills, Color::Cyan));
        output.push_str(&format!(
            "Showing {} of {} postings, sorted by {}\n",
            report.results.len(),
            report.total_postings,
            report.sort
        ));

        if let Some(overview) = &report.overview {
            output.push_str(&self.format_header("Match Overview", 2));
            output.push_str(&format!("Average score: {}%\n", overview.average_score));
            output.push_str(&format!("Top score: {}%\n", overview.top_score));
            output.push_str(&format!("Postings at 80%+: {}\n", overview.above_80));
            output.push_str(&format!("Postings at 60%+: {}\n", overview.above_60));
        }

        output.push_str(&self.format_header("Matches", 2));
        if report.results.is_empty() {
            output.push_str("No postings matched. Try relaxing your filters.\n");
        }
        for (index, result) in report.results.iter().enumerate() {
            output.push_str(&self.format_match(index, result));
        }

        Ok(output)
    }

    fn format_gap(&self, report: &GapReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 SKILL GAP ANALYSIS", 1));
        output.push_str(&format!(
            "Match Score: {}% {}\n",
            report.match_score,
            self.format_score_badge(report.match_score)
        ));

        output.push_str(&self.format_header("Skills", 2));
        output.push_str(&self.format_skill_line("Matched", &report.matched_skills, Color::Green));
        output.push_str(&self.format_skill_line("Missing", &report.missing_skills, Color::Red));
        output.push_str(&self.format_skill_line("Extra", &report.extra_skills, Color::Blue));
        if self.detailed {
            output.push_str(&self.format_skill_line("Job requires", &report.jd_skills, Color::White));
            output.push_str(&self.format_skill_line("Resume has", &report.candidate_skills, Color::White));
        }

        output.push_str(&self.format_header("Recommendations", 2));
        for recommendation in &report.recommendations {
            output.push_str(&format!("💡 {}\n", recommendation));
        }

        Ok(output)
    }

    fn format_skills(&self, report: &SkillProfileReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("🧰 SKILLS IN {}", report.source), 1));
        output.push_str(&format!(
            "ATS Score: {}% {}\n",
            report.ats_score,
            self.format_score_badge(report.ats_score)
        ));
        output.push_str(&format!("Words: {}\n", report.word_count));
        output.push_str(&self.format_skill_line("Technical", &report.technical_skills, Color::Cyan));
        output.push_str(&self.format_skill_line("Soft", &report.soft_skills, Color::Magenta));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_gap(&self, report: &GapReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_skills(&self, report: &SkillProfileReport) -> Result<String> {
        self.to_json(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            80..=100 => "🟢",
            60..=79 => "🟡",
            40..=59 => "🟠",
            _ => "🔴",
        }
    }

    fn skill_list(skills: &SkillSet) -> String {
        if skills.is_empty() {
            "_none_".to_string()
        } else {
            skills.iter().map(|s| format!("`{}`", s)).collect::<Vec<_>>().join(", ")
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::from("# Internship Recommendations\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "_Generated {} in {}ms, sorted by {}_\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.processing_time_ms,
                report.sort
            ));
        }
        output.push_str(&format!("**Your skills:** {}\n\n", Self::skill_list(&report.candidate_skills)));

        if let Some(overview) = &report.overview {
            output.push_str("## Match Overview\n\n");
            output.push_str("| Average | Top | 80%+ | 60%+ | Postings |\n");
            output.push_str("|---|---|---|---|---|\n");
            output.push_str(&format!(
                "| {}% | {}% | {} | {} | {} |\n\n",
                overview.average_score,
                overview.top_score,
                overview.above_80,
                overview.above_60,
                overview.total_postings
            ));
        }

        output.push_str("## Matches\n\n");
        if report.results.is_empty() {
            output.push_str("No postings matched the current filters.\n");
            return Ok(output);
        }

        output.push_str("| # | Role | Company | Location | Mode | Score | Matched skills |\n");
        output.push_str("|---|---|---|---|---|---|---|\n");
        for (index, result) in report.results.iter().enumerate() {
            let posting = &result.posting;
            let role = match &posting.apply_url {
                Some(url) => format!("[{}]({})", posting.role, url),
                None => posting.role.clone(),
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} {}% | {} |\n",
                index + 1,
                role,
                posting.company,
                posting.location(),
                posting.work_mode(),
                Self::markdown_score_badge(result.score),
                result.score,
                Self::skill_list(&result.matched_skills)
            ));
        }

        Ok(output)
    }

    fn format_gap(&self, report: &GapReport) -> Result<String> {
        let mut output = String::from("# Skill Gap Analysis\n\n");

        output.push_str(&format!(
            "**Match score:** {} {}%\n\n",
            Self::markdown_score_badge(report.match_score),
            report.match_score
        ));
        output.push_str("## Skills\n\n");
        output.push_str(&format!("- **Matched ({}):** {}\n", report.total_matched, Self::skill_list(&report.matched_skills)));
        output.push_str(&format!("- **Missing ({}):** {}\n", report.total_missing, Self::skill_list(&report.missing_skills)));
        output.push_str(&format!("- **Extra ({}):** {}\n\n", report.total_extra, Self::skill_list(&report.extra_skills)));

        output.push_str("## Recommendations\n\n");
        for (index, recommendation) in report.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, recommendation));
        }

        Ok(output)
    }

    fn format_skills(&self, report: &SkillProfileReport) -> Result<String> {
        let mut output = format!("# Skills in {}\n\n", report.source);
        output.push_str(&format!(
            "**ATS score:** {} {}%\n\n",
            Self::markdown_score_badge(report.ats_score),
            report.ats_score
        ));
        output.push_str(&format!("- **Technical:** {}\n", Self::skill_list(&report.technical_skills)));
        output.push_str(&format!("- **Soft:** {}\n", Self::skill_list(&report.soft_skills)));
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Dispatches reports to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    fn formatter(&self, format: &OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn ranking(&self, report: &RankingReport, format: &OutputFormat) -> Result<String> {
        self.formatter(format).format_ranking(report)
    }

    pub fn gap(&self, report: &GapReport, format: &OutputFormat) -> Result<String> {
        self.formatter(format).format_gap(report)
    }

    pub fn skills(&self, report: &SkillProfileReport, format: &OutputFormat) -> Result<String> {
        self.formatter(format).format_skills(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content).map_err(|e| {
        SkillMatchError::OutputFormatting(format!("Failed to write {}: {}", file_path.display(), e))
    })
}

pub fn suggest_filename(format: &OutputFormat, base_name: &str, timestamp: bool) -> String {
    let stem = Path::new(base_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_report{}.txt", stem, timestamp_suffix),
        OutputFormat::Json => format!("{}_report{}.json", stem, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_report{}.md", stem, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::gap_analyzer::analyze_gap;
    use crate::processing::types::{Posting, SortKey};

    fn ranking_report() -> RankingReport {
        let posting = Posting {
            id: "p1".to_string(),
            company: "Acme".to_string(),
            role: "Backend Intern".to_string(),
            location: Some("Remote".to_string()),
            work_mode: Some("Work From Home".to_string()),
            declared_skills: ["python"].iter().collect(),
            description: None,
            compensation_text: Some("₹10,000 /month".to_string()),
            apply_url: Some("https://example.com/apply".to_string()),
            source: Some("internshala".to_string()),
            posted_at: None,
        };
        RankingReport::new(
            ["python"].iter().collect(),
            SortKey::Match,
            vec![MatchResult {
                posting,
                score: 100,
                matched_skills: ["python"].iter().collect(),
            }],
            None,
            1,
            2,
        )
    }

    #[test]
    fn test_console_ranking_without_colors() {
        let output = ConsoleFormatter::new(false, true)
            .format_ranking(&ranking_report())
            .unwrap();
        assert!(output.contains("1. Backend Intern at Acme 100% [STRONG]"));
        assert!(output.contains("Matched: python"));
        assert!(output.contains("Apply: https://example.com/apply"));
    }

    #[test]
    fn test_console_gap_lists_recommendations() {
        let report = analyze_gap("Python, SQL and Docker", "Python").unwrap();
        let output = ConsoleFormatter::new(false, false).format_gap(&report).unwrap();
        assert!(output.contains("Match Score: 33% [WEAK]"));
        assert!(output.contains("Missing (2): docker, sql"));
        assert_eq!(output.matches("💡").count(), report.recommendations.len());
    }

    #[test]
    fn test_json_output_parses_back() {
        let output = JsonFormatter::new(false).format_ranking(&ranking_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["results"][0]["score"], 100);
        assert_eq!(value["results"][0]["posting"]["declared_skills"][0], "python");
    }

    #[test]
    fn test_markdown_ranking_table() {
        let output = MarkdownFormatter::new(false).format_ranking(&ranking_report()).unwrap();
        assert!(output.contains("| 1 | [Backend Intern](https://example.com/apply) | Acme |"));
        assert!(output.contains("🟢 100%"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true, false);
        let report = analyze_gap("Python", "Python").unwrap();
        let json = generator.gap(&report, &OutputFormat::Json).unwrap();
        assert!(json.contains("\"match_score\": 100"));
        let md = generator.gap(&report, &OutputFormat::Markdown).unwrap();
        assert!(md.starts_with("# Skill Gap Analysis"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "resume.pdf", false), "resume_report.json");
        assert_eq!(suggest_filename(&OutputFormat::Markdown, "gap", false), "gap_report.md");
    }

    #[test]
    fn test_save_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.md");
        save_report_to_file("# hi", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# hi");
    }
}
