//! CLI binary for careercraft.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `AnalysisConfig`, runs one analysis, and prints the result.

use anyhow::{Context, Result};
use careercraft::{analyze, AnalysisConfig};
use clap::{ArgGroup, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Paste the job description inline
  careercraft resume.pdf --jd "Senior Rust developer. Tokio, axum, Postgres."

  # Read the job description from a file
  careercraft resume.pdf --jd-file posting.txt

  # Pipe the job description on stdin
  pbpaste | careercraft resume.pdf --jd-file -

  # Write the assessment to a file
  careercraft resume.pdf --jd-file posting.txt -o assessment.txt

  # Structured JSON (response + run stats)
  careercraft resume.pdf --jd-file posting.txt --json > result.json

ENVIRONMENT VARIABLES:
  GEMINI_API_KEY   Gemini API key (required; GOOGLE_API_KEY also accepted)

SETUP:
  1. Set API key:  export GEMINI_API_KEY=...
  2. Run:          careercraft resume.pdf --jd-file posting.txt

  A .env file in the working directory is loaded automatically.
"#;

/// Match a resume against a job description using the Gemini API.
#[derive(Parser, Debug)]
#[command(
    name = "careercraft",
    version,
    about = "Match a resume against a job description using the Gemini API",
    long_about = "Extracts the text of a resume PDF, sends it together with a job description \
to a Gemini model, and prints the model's assessment: match percentage, missing keywords, \
and a profile summary.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
#[command(group(ArgGroup::new("job").required(true).args(["jd", "jd_file"])))]
struct Cli {
    /// Path to the resume PDF.
    resume: PathBuf,

    /// Job description text, inline.
    #[arg(long)]
    jd: Option<String>,

    /// Read the job description from this file ('-' for stdin).
    #[arg(long)]
    jd_file: Option<PathBuf>,

    /// Write the assessment to this file instead of stdout.
    #[arg(short, long, env = "CAREERCRAFT_OUTPUT")]
    output: Option<PathBuf>,

    /// Completion model ID.
    #[arg(long, env = "CAREERCRAFT_MODEL")]
    model: Option<String>,

    /// Model-call timeout in seconds.
    #[arg(long, env = "CAREERCRAFT_API_TIMEOUT", default_value_t = 60)]
    api_timeout: u64,

    /// Max tokens the model may generate.
    #[arg(long, env = "CAREERCRAFT_MAX_TOKENS", default_value_t = 2048)]
    max_tokens: usize,

    /// Sampling temperature (0.0–2.0).
    #[arg(long, env = "CAREERCRAFT_TEMPERATURE", default_value_t = 0.2)]
    temperature: f32,

    /// Path to a text file containing a custom prompt template
    /// (must contain {text} and {jd}).
    #[arg(long, env = "CAREERCRAFT_PROMPT_TEMPLATE")]
    prompt_template: Option<PathBuf>,

    /// Output structured JSON (AnalysisOutput) instead of plain text.
    #[arg(long, env = "CAREERCRAFT_JSON")]
    json: bool,

    /// Disable the waiting spinner.
    #[arg(long, env = "CAREERCRAFT_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "CAREERCRAFT_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and the assessment itself.
    #[arg(short, long, env = "CAREERCRAFT_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load GEMINI_API_KEY and friends from a local .env, if present.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Gather inputs ────────────────────────────────────────────────────
    let job_description = read_job_description(&cli)?;
    if job_description.trim().is_empty() {
        anyhow::bail!("Job description is empty — nothing to match against");
    }

    let config = build_config(&cli).await?;

    // ── Run the pipeline ─────────────────────────────────────────────────
    let spinner = if !cli.quiet && !cli.no_progress && !cli.json {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message("Analysing resume against job description…");
        bar.enable_steady_tick(Duration::from_millis(80));
        Some(bar)
    } else {
        None
    };

    let result = analyze(&cli.resume, &job_description, &config).await;

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    let output = result.context("Analysis failed")?;

    // ── Render ───────────────────────────────────────────────────────────
    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        println!("{json}");
    } else if let Some(ref path) = cli.output {
        std::fs::write(path, &output.response)
            .with_context(|| format!("Failed to write output file {:?}", path))?;
        if !cli.quiet {
            eprintln!("{} wrote assessment to {}", green("✔"), bold(&path.display().to_string()));
        }
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(output.response.as_bytes())
            .context("Failed to write to stdout")?;
        if !output.response.ends_with('\n') {
            handle.write_all(b"\n").ok();
        }
    }

    if !cli.quiet && !cli.json {
        eprintln!(
            "   {}",
            dim(&format!(
                "{} pages, {} chars extracted — {} — {}ms",
                output.stats.page_count,
                output.stats.extracted_chars,
                output.stats.model,
                output.stats.total_duration_ms
            ))
        );
    }

    Ok(())
}

/// Resolve the job description from --jd, --jd-file, or stdin ('-').
fn read_job_description(cli: &Cli) -> Result<String> {
    if let Some(ref jd) = cli.jd {
        return Ok(jd.clone());
    }
    // The clap group guarantees jd_file is present here.
    let path = cli.jd_file.as_ref().expect("clap group enforces jd source");
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read job description from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job description from {:?}", path))
    }
}

/// Map CLI args to `AnalysisConfig`.
async fn build_config(cli: &Cli) -> Result<AnalysisConfig> {
    let mut builder = AnalysisConfig::builder()
        .api_timeout_secs(cli.api_timeout)
        .max_output_tokens(cli.max_tokens)
        .temperature(cli.temperature);

    if let Some(ref model) = cli.model {
        builder = builder.model(model.clone());
    }

    if let Some(ref path) = cli.prompt_template {
        let template = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read prompt template from {:?}", path))?;
        builder = builder.prompt_template(template);
    }

    builder.build().context("Invalid configuration")
}
