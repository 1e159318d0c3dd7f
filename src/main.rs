//! skillmatch: skill-based internship matching and gap analysis

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use skillmatch::cli::{self, CandidateArgs, Cli, Commands, ConfigAction, OutputArgs};
use skillmatch::config::{parse_output_format, Config, OutputFormat};
use skillmatch::input::corpus::load_postings;
use skillmatch::input::text_extractor::require_text;
use skillmatch::input::InputManager;
use skillmatch::output::formatter::{save_report_to_file, ReportGenerator};
use skillmatch::output::report::SkillProfileReport;
use skillmatch::processing::analyzer::{MatchingEngine, RankingRequest};
use skillmatch::processing::gap_analyzer::analyze_gap;
use skillmatch::processing::skill_extractor::extract_skills;
use skillmatch::processing::types::{CandidateProfile, MatchFilters, SortKey};
use skillmatch::{Result, SkillMatchError};
use std::path::Path;
use std::process;

const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "txt", "md"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Rank {
            postings,
            candidate,
            search,
            filter_skills,
            work_mode,
            location,
            min_score,
            sort,
            limit,
            prefer_role,
            prefer_mode,
            overview,
            output,
        } => {
            cli::validate_file_extension(&postings, &["json"])
                .map_err(|e| SkillMatchError::InvalidInput(format!("Postings file: {}", e)))?;

            let format = resolve_format(&output, &config)?;
            let sort = sort
                .map(|s| s.parse::<SortKey>())
                .transpose()
                .map_err(SkillMatchError::InvalidInput)?;

            let mut input_manager = InputManager::new().with_cache(config.input.enable_caching);
            let corpus = load_postings(&postings)
                .await
                .with_context(|| format!("Failed to load postings from {}", postings.display()))?;
            let engine = MatchingEngine::new(&config);
            let candidate = engine.apply_preferences(
                load_candidate(&candidate, &mut input_manager)
                    .await?
                    .with_preferences(prefer_role, prefer_mode),
            );

            info!("Candidate skills: {}", candidate.skills);

            let request = RankingRequest {
                filters: MatchFilters {
                    search_keyword: search,
                    skills: filter_skills.iter().collect(),
                    work_mode,
                    location,
                    ..MatchFilters::default()
                },
                min_score,
                sort,
                limit: limit.map(usize::from),
                include_overview: overview,
            };

            let report = engine.rank(&corpus, &candidate, &request)?;
            let rendered = report_generator(&output, &config).ranking(&report, &format)?;
            emit(&rendered, output.save.as_deref())?;
        }

        Commands::Gap {
            job,
            resume,
            resume_text,
            output,
        } => {
            cli::validate_file_extension(&job, DOCUMENT_EXTENSIONS)
                .map_err(|e| SkillMatchError::InvalidInput(format!("Job description file: {}", e)))?;

            let format = resolve_format(&output, &config)?;
            let mut input_manager = InputManager::new().with_cache(config.input.enable_caching);

            let job_text = input_manager
                .extract_non_empty(&job)
                .await
                .with_context(|| format!("Failed to read job description {}", job.display()))?;
            let candidate_text = match (resume, resume_text) {
                (Some(path), _) => {
                    cli::validate_file_extension(&path, DOCUMENT_EXTENSIONS)
                        .map_err(|e| SkillMatchError::InvalidInput(format!("Resume file: {}", e)))?;
                    input_manager
                        .extract_non_empty(&path)
                        .await
                        .with_context(|| format!("Failed to read resume {}", path.display()))?
                }
                (None, Some(text)) => require_text(&text, || {
                    "Please provide either resume text or upload a resume file".to_string()
                })?,
                (None, None) => {
                    return Err(SkillMatchError::InvalidInput(
                        "Provide a resume file or resume text".to_string(),
                    )
                    .into())
                }
            };

            let report = analyze_gap(&job_text, &candidate_text)?;
            let rendered = report_generator(&output, &config).gap(&report, &format)?;
            emit(&rendered, output.save.as_deref())?;
        }

        Commands::Skills { input, output } => {
            cli::validate_file_extension(&input, DOCUMENT_EXTENSIONS)
                .map_err(|e| SkillMatchError::InvalidInput(format!("Input file: {}", e)))?;

            let format = resolve_format(&output, &config)?;
            let mut input_manager = InputManager::new().with_cache(config.input.enable_caching);
            let text = input_manager
                .extract_non_empty(&input)
                .await
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let report = SkillProfileReport::from_text(&input.to_string_lossy(), &text, extract_skills(&text));
            let rendered = report_generator(&output, &config).skills(&report, &format)?;
            emit(&rendered, output.save.as_deref())?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("Ranking:");
                println!("  Default limit: {}", config.ranking.default_limit);
                println!("  Max limit: {}", config.ranking.max_limit);
                println!("  Default sort: {}", config.ranking.default_sort);
                println!("  Min score: {}", config.ranking.min_score);
                println!("\nPreferences:");
                println!("  Role keyword: {}", config.preferences.role_keyword.as_deref().unwrap_or("-"));
                println!("  Work mode: {}", config.preferences.work_mode.as_deref().unwrap_or("-"));
                println!("  Location: {}", config.preferences.location.as_deref().unwrap_or("-"));
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default()
                    .save_to(config_path)
                    .with_context(|| format!("Failed to write {}", config_path.display()))?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = config;
                config.set(&key, &value)?;
                config.save_to(config_path)?;
                println!("✅ Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}

async fn load_candidate(args: &CandidateArgs, input_manager: &mut InputManager) -> Result<CandidateProfile> {
    match (&args.resume, &args.skills) {
        (Some(path), _) => {
            cli::validate_file_extension(path, DOCUMENT_EXTENSIONS)
                .map_err(|e| SkillMatchError::InvalidInput(format!("Resume file: {}", e)))?;
            let text = input_manager.extract_non_empty(path).await?;
            Ok(CandidateProfile::from_text(&text))
        }
        (None, Some(skills)) => Ok(CandidateProfile::from_skills(skills.iter().collect())),
        (None, None) => Err(SkillMatchError::InvalidInput(
            "Provide a resume file or a skill list".to_string(),
        )),
    }
}

fn resolve_format(output: &OutputArgs, config: &Config) -> Result<OutputFormat> {
    match &output.output {
        Some(format) => parse_output_format(format).map_err(SkillMatchError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn report_generator(output: &OutputArgs, config: &Config) -> ReportGenerator {
    let use_colors = config.output.color_output && output.save.is_none();
    ReportGenerator::with_options(use_colors, output.detailed || config.output.detailed, true, true)
}

fn emit(rendered: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(rendered, path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
