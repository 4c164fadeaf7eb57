// All LLM prompt constants for the critique engine.
// Reuses cross-cutting fragments from llm_client::prompts.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Reviewer persona sent as the system message.
pub const CRITIQUE_SYSTEM: &str = "You are an expert resume reviewer with years of experience \
    in HR and recruitment. You score resumes consistently and give specific, actionable feedback.";

pub const DEFAULT_JOB_ROLE: &str = "general job applications";
pub const DEFAULT_JOB_DESCRIPTION: &str = "general roles";

/// Low temperature: this is scoring, not creative writing.
pub const CRITIQUE_TEMPERATURE: f32 = 0.3;
/// Room for the full schema plus several rewrite suggestions.
pub const CRITIQUE_MAX_TOKENS: u32 = 2000;

/// Critique prompt template.
/// Replace: {job_role}, {job_description}, {resume_text}, {json_only}
pub const CRITIQUE_PROMPT_TEMPLATE: &str = r#"Analyze this resume and provide structured, constructive feedback.

Focus on:
1. Content clarity and impact
2. Skills presentation
3. Experience descriptions
4. ATS (Applicant Tracking System) compatibility
5. Specific improvements for {job_role}

TARGET JOB DESCRIPTION:
{job_description}

RESUME CONTENT:
{resume_text}

Return a JSON object with this EXACT schema (all fields required):
{
  "overall_score": 78,
  "scores": {
    "content_clarity": 80,
    "skills_presentation": 75,
    "experience_descriptions": 70,
    "ats_compatibility": 85,
    "impact_statements": 65
  },
  "strengths": ["Clear progression of responsibility"],
  "weaknesses": ["Few quantified results"],
  "improvements": ["Add metrics to each experience bullet"],
  "rewrite_suggestions": [
    {
      "original": "Worked on the payments service",
      "improved": "Rebuilt the payments service, cutting checkout latency by 35%",
      "explanation": "Leads with an action verb and quantifies the impact"
    }
  ],
  "keywords_missing": ["Kubernetes"],
  "ats_recommendations": ["Use standard section headers"]
}

RULES:
- Every score is a whole number from 0 to 100.
- Give up to 3 rewrite_suggestions, quoting lines from the resume as "original".
- keywords_missing lists terms from the job description that the resume lacks.

{json_only}"#;

/// Fills the critique template. Blank optional inputs fall back to the defaults.
pub fn build_critique_prompt(
    resume_text: &str,
    job_role: Option<&str>,
    job_description: Option<&str>,
) -> String {
    let job_role = non_blank(job_role).unwrap_or(DEFAULT_JOB_ROLE);
    let job_description = non_blank(job_description).unwrap_or(DEFAULT_JOB_DESCRIPTION);

    // Single pass over the template: substituted text is never scanned again,
    // so braces inside user input stay literal.
    placeholder()
        .replace_all(CRITIQUE_PROMPT_TEMPLATE, |caps: &Captures| match &caps[1] {
            "job_role" => job_role,
            "job_description" => job_description,
            "resume_text" => resume_text,
            _ => JSON_ONLY_INSTRUCTION,
        })
        .into_owned()
}

fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{(job_role|job_description|resume_text|json_only)\}")
            .expect("static pattern is valid")
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
