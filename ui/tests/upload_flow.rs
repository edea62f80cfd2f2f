//! Drives the upload lifecycle through the public API with a scripted
//! analysis service standing in for the network.

use std::cell::RefCell;
use std::collections::VecDeque;

use api::{interpret_response, AnalysisError, AnalysisResult, AnalysisService, ReportUpload};
use futures::executor::block_on;
use ui::results::{MarkerTone, RangePosition};
use ui::upload::{FileCandidate, UploadController, UploadError, UploadState, PDF_MEDIA_TYPE};

const HEMOGLOBIN_REPORT: &str = r#"{
    "summary": "One value sits outside its reference interval.",
    "biomarkers": [
        {
            "name": "Potassium",
            "value": 5.5,
            "unit": "mmol/L",
            "reference_low": 4.0,
            "reference_high": 6.0,
            "status": "normal",
            "explanation": "Within range."
        },
        {
            "name": "Hemoglobin",
            "value": 10.2,
            "unit": "g/dL",
            "reference_low": 12.0,
            "reference_high": 15.5,
            "status": "low",
            "explanation": "Below the reference interval.",
            "recommendation": "Discuss iron studies with your doctor."
        }
    ],
    "concerns": ["Mild anaemia"],
    "recommendations": ["Repeat the blood count in four weeks"],
    "disclaimer": "Not a diagnosis."
}"#;

/// Answers each call with the next scripted response and records what it was sent.
#[derive(Default)]
struct Scripted {
    responses: RefCell<VecDeque<Result<AnalysisResult, AnalysisError>>>,
    seen: RefCell<Vec<ReportUpload>>,
}

impl Scripted {
    fn answering(responses: impl IntoIterator<Item = Result<AnalysisResult, AnalysisError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter().collect()),
            seen: RefCell::default(),
        }
    }
}

impl AnalysisService for Scripted {
    async fn analyze(&self, upload: ReportUpload) -> Result<AnalysisResult, AnalysisError> {
        self.seen.borrow_mut().push(upload);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AnalysisError::Network("no scripted response".into())))
    }
}

fn report() -> AnalysisResult {
    interpret_response(200, HEMOGLOBIN_REPORT.as_bytes()).unwrap()
}

fn pdf(name: &str) -> FileCandidate {
    FileCandidate::new(name, PDF_MEDIA_TYPE, b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n".to_vec())
}

#[test]
fn selected_pdf_is_analysed_and_result_kept_verbatim() {
    let service = Scripted::answering([Ok(report())]);
    let mut controller = UploadController::default();

    controller.select(pdf("report.pdf")).unwrap();
    assert!(controller.can_submit());

    let submission = controller.submit().unwrap();
    assert!(controller.state().is_submitting());
    let outcome = block_on(submission.run(&service));
    controller.resolve(outcome).unwrap();

    match controller.state() {
        UploadState::Succeeded(result) => assert_eq!(result, &report()),
        other => panic!("expected success, got {other:?}"),
    }

    let seen = service.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].file_name, "report.pdf");
    assert!(seen[0].bytes.starts_with(b"%PDF-"));
}

#[test]
fn image_is_rejected_before_any_request() {
    let service = Scripted::default();
    let mut controller = UploadController::default();

    let err = controller
        .select(FileCandidate::new("scan.png", "image/png", vec![0x89, b'P', b'N', b'G']))
        .unwrap_err();

    assert!(matches!(err, UploadError::Rejected(_)));
    assert_eq!(
        controller.field_error().map(ToString::to_string).as_deref(),
        Some("not a PDF")
    );
    assert_eq!(controller.state(), &UploadState::Empty);
    assert_eq!(controller.submit().unwrap_err(), UploadError::NothingSelected);
    assert!(service.seen.borrow().is_empty());
}

#[test]
fn failure_keeps_file_for_manual_retry() {
    let service = Scripted::answering([Err(AnalysisError::Status(500)), Ok(report())]);
    let mut controller = UploadController::default();
    controller.select(pdf("bloods-march.pdf")).unwrap();

    let first = controller.submit().unwrap();
    controller.resolve(block_on(first.run(&service))).unwrap();
    match controller.state() {
        UploadState::Failed { file, message } => {
            assert_eq!(file.name(), "bloods-march.pdf");
            assert_eq!(message, &controller.config().failure_message);
            assert!(!message.contains("500"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(controller.last_failure(), Some(&AnalysisError::Status(500)));

    let retry = controller.submit().unwrap();
    controller.resolve(block_on(retry.run(&service))).unwrap();
    assert!(matches!(controller.state(), UploadState::Succeeded(_)));
    assert_eq!(service.seen.borrow().len(), 2);
}

#[test]
fn new_selection_after_success_starts_over() {
    let service = Scripted::answering([Ok(report())]);
    let mut controller = UploadController::default();
    controller.select(pdf("first.pdf")).unwrap();
    let submission = controller.submit().unwrap();
    controller.resolve(block_on(submission.run(&service))).unwrap();

    controller.select(pdf("second.pdf")).unwrap();

    assert_eq!(controller.state().file().map(|f| f.name()), Some("second.pdf"));
    assert!(controller.can_submit());
}

#[test]
fn decoded_biomarkers_map_onto_the_range_bar() {
    let result = report();
    let potassium = &result.biomarkers[0];
    let pos = RangePosition::map(potassium.value, potassium.reference_low, potassium.reference_high);
    assert!((pos.value_pct - 67.857).abs() < 0.01, "{pos:?}");
    assert!((pos.low_pct - 14.286).abs() < 0.01, "{pos:?}");
    assert!((pos.high_pct - 85.714).abs() < 0.01, "{pos:?}");

    let hemoglobin = &result.biomarkers[1];
    let pos = RangePosition::map(hemoglobin.value, hemoglobin.reference_low, hemoglobin.reference_high);
    assert!(pos.marker_pct() < pos.low_pct);
    assert_eq!(MarkerTone::for_status(hemoglobin.status), MarkerTone::Warning);
    assert_eq!(result.flagged().count(), 1);
}
