//! End-to-end pipeline tests with an in-process model double.
//!
//! No network, no API key: the `CompletionProvider` seam is filled with a
//! recording double, and resume fixtures are built programmatically with
//! lopdf. Everything here runs in CI.

use async_trait::async_trait;
use careercraft::{
    analyze, analyze_bytes, AnalysisConfig, AtsError, CompletionProvider, ErrorKind,
};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ── Fixtures ─────────────────────────────────────────────────────────────────

/// Build a minimal PDF with one page per entry, each showing its string.
fn build_resume_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page_text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let kids_len = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => kids_len,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// Recording double: counts calls, captures prompts, returns a fixed answer
/// (or a forced upstream failure).
struct RecordingProvider {
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    response: Result<&'static str, ()>,
}

impl RecordingProvider {
    fn succeeding(response: &'static str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            response: Ok(response),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            response: Err(()),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for RecordingProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AtsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.response {
            Ok(text) => Ok(text.to_string()),
            Err(()) => Err(AtsError::RequestFailed {
                reason: "simulated network failure".into(),
            }),
        }
    }

    fn model_id(&self) -> &str {
        "recording-double"
    }
}

fn config_with(provider: Arc<RecordingProvider>) -> AnalysisConfig {
    AnalysisConfig::builder()
        .provider(provider as Arc<dyn CompletionProvider>)
        .build()
        .expect("valid config")
}

// ── Happy path ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn response_is_rendered_verbatim() {
    let fixed = "42%\nKeywords: X, Y\nSummary: ...";
    let provider = RecordingProvider::succeeding(fixed);
    let config = config_with(Arc::clone(&provider));

    let pdf = build_resume_pdf(&["Rust engineer with tokio experience"]);
    let output = analyze_bytes(&pdf, "Senior Rust developer", &config)
        .await
        .expect("analysis should succeed");

    assert_eq!(output.response, fixed, "no reformatting or parsing allowed");
    assert_eq!(provider.call_count(), 1, "exactly one model call");
}

#[tokio::test]
async fn prompt_contains_resume_text_and_job_description() {
    let provider = RecordingProvider::succeeding("ok");
    let config = config_with(Arc::clone(&provider));

    let pdf = build_resume_pdf(&["page one alpha skills", "page two beta skills"]);
    analyze_bytes(&pdf, "the posted job description", &config)
        .await
        .expect("analysis should succeed");

    let prompts = provider.prompts.lock().unwrap();
    let prompt = &prompts[0];

    // Both inputs must reach the model verbatim.
    assert!(prompt.contains("page one alpha skills"));
    assert!(prompt.contains("page two beta skills"));
    assert!(prompt.contains("the posted job description"));

    // Page order must be preserved inside the prompt.
    let first = prompt.find("page one alpha skills").unwrap();
    let second = prompt.find("page two beta skills").unwrap();
    assert!(first < second);

    // No unsubstituted placeholders may leak into the request.
    assert!(!prompt.contains("{text}"));
    assert!(!prompt.contains("{jd}"));
}

#[tokio::test]
async fn stats_reflect_the_run() {
    let provider = RecordingProvider::succeeding("fine");
    let config = config_with(provider);

    let pdf = build_resume_pdf(&["a", "b", "c"]);
    let output = analyze_bytes(&pdf, "jd", &config).await.unwrap();

    assert_eq!(output.stats.page_count, 3);
    assert!(output.stats.extracted_chars > 0);
    assert!(output.stats.prompt_chars > output.stats.extracted_chars);
    assert_eq!(output.stats.model, "recording-double");
}

#[tokio::test]
async fn analyze_reads_from_a_real_file() {
    let provider = RecordingProvider::succeeding("assessment text");
    let config = config_with(Arc::clone(&provider));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.pdf");
    std::fs::write(&path, build_resume_pdf(&["file-backed resume"])).unwrap();

    let output = analyze(&path, "jd text", &config).await.unwrap();
    assert_eq!(output.response, "assessment text");

    let prompts = provider.prompts.lock().unwrap();
    assert!(prompts[0].contains("file-backed resume"));
}

// ── Failure paths ────────────────────────────────────────────────────────────

#[tokio::test]
async fn invalid_document_never_reaches_the_model() {
    let provider = RecordingProvider::succeeding("should never be seen");
    let config = config_with(Arc::clone(&provider));

    let err = analyze_bytes(b"%PDF-1.5 truncated garbage", "jd", &config)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Extraction);
    assert_eq!(provider.call_count(), 0, "no prompt may be composed or sent");
}

#[tokio::test]
async fn missing_file_never_reaches_the_model() {
    let provider = RecordingProvider::succeeding("should never be seen");
    let config = config_with(Arc::clone(&provider));

    let err = analyze("/no/such/resume.pdf", "jd", &config)
        .await
        .unwrap_err();

    assert!(matches!(err, AtsError::FileNotFound { .. }));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn non_pdf_file_is_rejected_before_extraction() {
    let provider = RecordingProvider::succeeding("should never be seen");
    let config = config_with(Arc::clone(&provider));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.docx");
    std::fs::write(&path, b"PK\x03\x04 definitely a zip").unwrap();

    let err = analyze(&path, "jd", &config).await.unwrap_err();
    assert!(matches!(err, AtsError::NotAPdf { .. }));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn upstream_failure_surfaces_and_renders_nothing() {
    let provider = RecordingProvider::failing();
    let config = config_with(Arc::clone(&provider));

    let pdf = build_resume_pdf(&["valid resume"]);
    let err = analyze_bytes(&pdf, "jd", &config).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert!(err.is_recoverable(), "user may retry the submission");
    assert_eq!(provider.call_count(), 1, "exactly one attempt, no retries");
}

#[tokio::test]
async fn empty_job_description_still_composes_and_sends() {
    let provider = RecordingProvider::succeeding("sparse but valid");
    let config = config_with(Arc::clone(&provider));

    let pdf = build_resume_pdf(&["resume body"]);
    let output = analyze_bytes(&pdf, "", &config).await.unwrap();

    assert_eq!(output.response, "sparse but valid");
    assert_eq!(provider.call_count(), 1);
}

// ── Configuration failure ────────────────────────────────────────────────────

#[tokio::test]
async fn missing_credential_fails_fast_without_a_request() {
    // No provider override and no key in config; only meaningful when the
    // environment doesn't carry a real key.
    if std::env::var("GEMINI_API_KEY").is_ok() || std::env::var("GOOGLE_API_KEY").is_ok() {
        return;
    }

    let config = AnalysisConfig::default();
    let pdf = build_resume_pdf(&["resume"]);
    let err = analyze_bytes(&pdf, "jd", &config).await.unwrap_err();

    assert!(matches!(err, AtsError::MissingApiKey));
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(!err.is_recoverable());
}
