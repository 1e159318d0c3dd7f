//! Skill-gap analysis between a job description and a candidate document

use crate::error::{Result, SkillMatchError};
use crate::processing::scorer::percentage_half_even;
use crate::processing::skill_extractor::extract_skills;
use crate::processing::types::SkillSet;
use crate::processing::vocabulary::is_soft_skill;
use log::info;
use serde::{Deserialize, Serialize};

const STRONG_MATCH_THRESHOLD: u8 = 80;
const DECENT_MATCH_THRESHOLD: u8 = 50;
const MAX_LISTED_MISSING: usize = 5;
const MAX_LISTED_MATCHED: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    /// Share of the job's skills the candidate has (0-100)
    pub match_score: u8,
    pub jd_skills: SkillSet,
    pub candidate_skills: SkillSet,
    pub matched_skills: SkillSet,
    pub missing_skills: SkillSet,
    pub extra_skills: SkillSet,
    pub total_jd_skills: usize,
    pub total_candidate_skills: usize,
    pub total_matched: usize,
    pub total_missing: usize,
    pub total_extra: usize,
    pub recommendations: Vec<String>,
}

/// Compare a job description against a candidate's resume text.
///
/// Fails only when the job description is blank. A job description with
/// no recognizable skills scores 0, unlike posting scoring which falls
/// back to a neutral value.
pub fn analyze_gap(job_description: &str, candidate_text: &str) -> Result<GapReport> {
    if job_description.trim().is_empty() {
        return Err(SkillMatchError::InvalidInput(
            "Job description cannot be empty".to_string(),
        ));
    }

    let jd_skills = extract_skills(job_description);
    let candidate_skills = extract_skills(candidate_text);

    let matched_skills = jd_skills.intersection(&candidate_skills);
    let missing_skills = jd_skills.difference(&candidate_skills);
    let extra_skills = candidate_skills.difference(&jd_skills);

    let match_score = percentage_half_even(matched_skills.len(), jd_skills.len());
    let recommendations = generate_recommendations(&missing_skills, &matched_skills, match_score);

    info!(
        "Gap analysis complete: match {}%, matched {}, missing {}",
        match_score,
        matched_skills.len(),
        missing_skills.len()
    );

    Ok(GapReport {
        match_score,
        total_jd_skills: jd_skills.len(),
        total_candidate_skills: candidate_skills.len(),
        total_matched: matched_skills.len(),
        total_missing: missing_skills.len(),
        total_extra: extra_skills.len(),
        jd_skills,
        candidate_skills,
        matched_skills,
        missing_skills,
        extra_skills,
        recommendations,
    })
}

fn generate_recommendations(missing: &SkillSet, matched: &SkillSet, match_score: u8) -> Vec<String> {
    let mut recommendations = Vec::new();

    let tier = if match_score >= STRONG_MATCH_THRESHOLD {
        "Your resume is a strong match for this role. Focus on tailoring experience descriptions to the job."
    } else if match_score >= DECENT_MATCH_THRESHOLD {
        "Decent match. Adding the missing skills would significantly boost your chances."
    } else {
        "Significant skill gap detected. Consider upskilling in the missing areas before applying."
    };
    recommendations.push(tier.to_string());

    if !missing.is_empty() {
        recommendations.push(format!(
            "Add these skills to your resume: {}",
            missing.take(MAX_LISTED_MISSING).join(", ")
        ));

        let (soft, technical): (Vec<&str>, Vec<&str>) = missing.iter().partition(|s| is_soft_skill(s));

        if !technical.is_empty() {
            let listed: Vec<&str> = technical.into_iter().take(MAX_LISTED_MISSING).collect();
            recommendations.push(format!(
                "Consider learning: {} through online courses or projects.",
                listed.join(", ")
            ));
        }
        if !soft.is_empty() {
            recommendations.push(format!(
                "Highlight these soft skills with examples: {}",
                soft.join(", ")
            ));
        }
    }

    if !matched.is_empty() {
        recommendations.push(format!(
            "Strengthen your resume by providing quantifiable achievements for: {}",
            matched.take(MAX_LISTED_MATCHED).join(", ")
        ));
    }

    recommendations
}
