//! CLI interface for the skill matcher

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "skillmatch")]
#[command(about = "Skill-based internship matching and skill-gap analysis")]
#[command(long_about = "Rank internship postings against your resume skills, and compare a job description with your resume to find missing skills")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank postings for a candidate
    Rank {
        /// JSON file with the postings corpus
        #[arg(short, long)]
        postings: PathBuf,

        #[command(flatten)]
        candidate: CandidateArgs,

        /// Keyword matched against role, company and description
        #[arg(long)]
        search: Option<String>,

        /// Only keep postings asking for any of these skills (comma separated)
        #[arg(long, value_delimiter = ',')]
        filter_skills: Vec<String>,

        /// Work mode filter, e.g. remote, hybrid ("all" disables)
        #[arg(long)]
        work_mode: Option<String>,

        /// Location filter ("all" disables)
        #[arg(long)]
        location: Option<String>,

        /// Drop postings scoring below this value (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        min_score: Option<u8>,

        /// Sort order: match, recent, salary
        #[arg(long)]
        sort: Option<String>,

        /// Maximum number of results (1-100)
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=100))]
        limit: Option<u16>,

        /// Preferred role keyword, boosts matching postings
        #[arg(long)]
        prefer_role: Option<String>,

        /// Preferred work mode, boosts matching postings
        #[arg(long)]
        prefer_mode: Option<String>,

        /// Include corpus-wide match statistics
        #[arg(long)]
        overview: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compare a job description against a resume
    Gap {
        /// Path to job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: PathBuf,

        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long, conflicts_with = "resume_text", required_unless_present = "resume_text")]
        resume: Option<PathBuf>,

        /// Resume text pasted directly
        #[arg(long)]
        resume_text: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the skills found in a document and its ATS score
    Skills {
        /// Path to the document (PDF, TXT, MD)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Where the candidate's skills come from
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct CandidateArgs {
    /// Path to resume file (PDF, TXT, MD)
    #[arg(short, long)]
    pub resume: Option<PathBuf>,

    /// Explicit skill list (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    pub skills: Option<Vec<String>>,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Output format: console, json, markdown
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output detailed analysis
    #[arg(short, long)]
    pub detailed: bool,

    /// Save output to file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "ranking.default_limit")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
