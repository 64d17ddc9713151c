//! The instructional prompt sent to the model.
//!
//! Centralising the prompt here serves two purposes:
//!
//! 1. **Single source of truth** — tweaking the instructions or the required
//!    response structure means editing exactly one place.
//!
//! 2. **Testability** — unit tests can inspect the composed payload without
//!    spinning up a real model, making prompt regressions easy to catch.
//!
//! Callers can override the template via
//! [`crate::config::AnalysisConfig::prompt_template`]; the constant here is
//! used only when no override is provided.

/// Bumped whenever [`ATS_PROMPT_TEMPLATE`] changes in a way that could alter
/// model output. Logged with every submission so runs can be compared.
pub const PROMPT_VERSION: &str = "v1";

/// Placeholder for the extracted resume text.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Placeholder for the user-supplied job description.
pub const JD_PLACEHOLDER: &str = "{jd}";

/// Default instructional template.
///
/// Asks the model for a three-section response: match percentage, missing
/// keywords, profile summary. The structure is requested, not guaranteed —
/// the response is rendered verbatim either way.
pub const ATS_PROMPT_TEMPLATE: &str = r#"As an experienced ATS (Applicant Tracking System), proficient in the technical domain encompassing
Software Engineering, Data Science, Data Analysis, Big Data Engineering, Web Developer, Mobile App
Developer, DevOps Engineer, Machine Learning Engineer, Cybersecurity Analyst, Cloud Solutions Architect,
Database Administrator, Network Engineer, AI Engineer, Systems Analyst, Full Stack Developer, UI/UX
Designer, IT Project Manager, and additional specialized areas, your objective is to meticulously assess
resumes against provided job descriptions. In a fiercely competitive job market, your expertise is crucial
in offering top-notch guidance for resume enhancement. Assign precise matching percentages based on the JD
(Job Description) and meticulously identify any missing keywords with utmost accuracy.

resume:{text}
description:{jd}

I want the response in the following structure:
The first line indicates the percentage match with the job description (JD).
The second line presents a list of missing keywords.
The third section provides a profile summary.

Mention the title for all the three sections.
While generating the response put some space to separate all the three sections."#;

/// Substitute the resume text and job description into `template`.
///
/// Pure function: no I/O, no hidden state, never fails. Empty inputs are
/// accepted and simply yield a sparser prompt. The template is scanned in a
/// single pass and substituted text is never rescanned, so a resume that
/// happens to contain the literal string `{jd}` cannot swallow the job
/// description.
pub fn compose_prompt(template: &str, resume_text: &str, job_description: &str) -> String {
    let mut out =
        String::with_capacity(template.len() + resume_text.len() + job_description.len());
    let mut rest = template;

    while !rest.is_empty() {
        let text_at = rest.find(TEXT_PLACEHOLDER);
        let jd_at = rest.find(JD_PLACEHOLDER);

        // Earliest placeholder wins; ties are impossible (distinct markers).
        let (at, marker, value) = match (text_at, jd_at) {
            (Some(t), Some(j)) if t <= j => (t, TEXT_PLACEHOLDER, resume_text),
            (_, Some(j)) => (j, JD_PLACEHOLDER, job_description),
            (Some(t), None) => (t, TEXT_PLACEHOLDER, resume_text),
            (None, None) => {
                out.push_str(rest);
                break;
            }
        };

        out.push_str(&rest[..at]);
        out.push_str(value);
        rest = &rest[at + marker.len()..];
    }

    out
}
