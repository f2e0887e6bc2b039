use std::sync::Once;

use advisor_core::{
    update, AnalysisResult, AppState, DocumentSlot, Effect, Msg, PdfDocument, Phase, Submission,
    SUBMIT_LABEL,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(advisor_logging::initialize_for_tests);
}

fn drop_file(state: AppState, slot: DocumentSlot, path: &str) -> AppState {
    let (state, effects) = update(
        state,
        Msg::FilesDropped {
            slot,
            files: vec![PdfDocument::from_path(path)],
        },
    );
    assert!(effects.is_empty());
    state
}

fn filled_form(position: &str, profile: &str) -> AppState {
    let (state, _) = update(AppState::new(), Msg::PositionChanged(position.to_string()));
    let (state, _) = update(state, Msg::GithubProfileChanged(profile.to_string()));
    let state = drop_file(state, DocumentSlot::Transcript, "/docs/transcript.pdf");
    drop_file(state, DocumentSlot::Resume, "/docs/resume.pdf")
}

fn submitted_request(effects: &[Effect]) -> (u64, Submission) {
    match effects {
        [Effect::SubmitAnalysis {
            request_id,
            submission,
        }] => (*request_id, submission.clone()),
        other => panic!("expected one submit effect, got {other:?}"),
    }
}

#[test]
fn submit_disabled_until_position_and_both_documents_present() {
    init_logging();
    let state = AppState::new();
    assert!(!state.view().submit.enabled);

    let (state, _) = update(state, Msg::PositionChanged("Data Engineer".to_string()));
    assert!(!state.view().submit.enabled);

    let state = drop_file(state, DocumentSlot::Transcript, "/docs/transcript.pdf");
    assert!(!state.view().submit.enabled);

    let state = drop_file(state, DocumentSlot::Resume, "/docs/resume.pdf");
    assert!(state.view().submit.enabled);
    assert_eq!(state.view().submit.label, SUBMIT_LABEL);

    let (state, _) = update(state, Msg::PositionChanged(String::new()));
    assert!(!state.view().submit.enabled);
}

#[test]
fn submit_with_incomplete_form_emits_nothing() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PositionChanged("QA".to_string()));
    let state = drop_file(state, DocumentSlot::Resume, "/docs/resume.pdf");

    let (next, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(next.phase(), Phase::Idle);
    assert_eq!(next.in_flight(), None);
}

#[test]
fn second_drop_replaces_first() {
    init_logging();
    let state = drop_file(AppState::new(), DocumentSlot::Transcript, "/docs/old.pdf");
    let state = drop_file(state, DocumentSlot::Transcript, "/docs/new.pdf");

    let zone = state.drop_zone(DocumentSlot::Transcript);
    assert_eq!(zone.file().unwrap().path.to_str(), Some("/docs/new.pdf"));
    assert_eq!(state.view().transcript.text, "new.pdf");
    assert!(state.view().transcript.filled);
    assert!(!state.view().resume.filled);
    assert_eq!(state.view().resume.text, "Drop resume PDF here");
}

#[test]
fn non_pdf_and_multi_file_drops_are_rejected() {
    init_logging();
    let state = drop_file(AppState::new(), DocumentSlot::Resume, "/docs/resume.pdf");

    let (state, _) = update(
        state,
        Msg::FilesDropped {
            slot: DocumentSlot::Resume,
            files: vec![PdfDocument::from_path("/docs/resume.docx")],
        },
    );
    let view = state.view();
    assert_eq!(view.resume.text, "resume.pdf");
    assert!(view.resume.notice.unwrap().contains("resume.docx is not a PDF"));

    let (state, _) = update(
        state,
        Msg::FilesDropped {
            slot: DocumentSlot::Resume,
            files: vec![
                PdfDocument::from_path("/docs/a.pdf"),
                PdfDocument::from_path("/docs/b.pdf"),
            ],
        },
    );
    assert_eq!(state.view().resume.text, "resume.pdf");

    let state = drop_file(state, DocumentSlot::Resume, "/docs/b.pdf");
    assert_eq!(state.view().resume.notice, None);
}

#[test]
fn submit_sends_required_parts_and_omits_empty_profile() {
    init_logging();
    let (state, effects) = update(filled_form("Backend Developer", ""), Msg::SubmitClicked);

    let (request_id, submission) = submitted_request(&effects);
    assert_eq!(request_id, 1);
    assert_eq!(submission.desired_position, "Backend Developer");
    assert_eq!(submission.transcript.name, "transcript.pdf");
    assert_eq!(submission.resume.name, "resume.pdf");
    assert_eq!(submission.github_profile, None);
    assert_eq!(state.phase(), Phase::Submitting);
}

#[test]
fn submit_includes_profile_when_present() {
    init_logging();
    let (_state, effects) = update(
        filled_form("Backend Developer", "https://github.com/octocat"),
        Msg::SubmitClicked,
    );

    let (_, submission) = submitted_request(&effects);
    assert_eq!(
        submission.github_profile.as_deref(),
        Some("https://github.com/octocat")
    );
}

#[test]
fn second_submit_blocked_while_in_flight() {
    init_logging();
    let (mut state, effects) = update(filled_form("SRE", ""), Msg::SubmitClicked);
    assert_eq!(effects.len(), 1);
    assert!(state.consume_dirty());

    let view = state.view();
    assert!(view.submit.busy);
    assert!(!view.submit.enabled);
    assert_ne!(view.submit.label, SUBMIT_LABEL);

    let (mut state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(state.in_flight(), Some(1));
    assert!(!state.consume_dirty());

    // Inputs stay editable during the request.
    let (state, _) = update(state, Msg::PositionChanged("Platform SRE".to_string()));
    assert_eq!(state.view().position, "Platform SRE");

    let (state, _) = update(
        state,
        Msg::AnalysisSucceeded {
            request_id: 1,
            result: AnalysisResult::default(),
        },
    );
    assert!(state.view().submit.enabled);

    let (_state, effects) = update(state, Msg::SubmitClicked);
    let (request_id, submission) = submitted_request(&effects);
    assert_eq!(request_id, 2);
    assert_eq!(submission.desired_position, "Platform SRE");
}

#[test]
fn tick_advances_busy_indicator() {
    init_logging();
    let (mut state, _) = update(filled_form("SRE", ""), Msg::SubmitClicked);
    let first = state.view().submit.label;
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::Tick);
    assert!(state.consume_dirty());
    assert_ne!(state.view().submit.label, first);
}

#[test]
fn failure_shows_message_and_clears_loading() {
    init_logging();
    let (state, _) = update(filled_form("SRE", ""), Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::AnalysisFailed {
            request_id: 1,
            message: "File too large".to_string(),
        },
    );

    let view = state.view();
    assert_eq!(view.phase, Phase::ShowingError);
    assert_eq!(view.error.as_deref(), Some("File too large"));
    assert!(!view.submit.busy);
    assert!(view.submit.enabled);
}

#[test]
fn resubmit_clears_previous_error_and_success_replaces_result() {
    init_logging();
    let (state, _) = update(filled_form("SRE", ""), Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::AnalysisFailed {
            request_id: 1,
            message: "boom".to_string(),
        },
    );

    let (state, _) = update(state, Msg::SubmitClicked);
    assert_eq!(state.view().error, None);
    assert_eq!(state.phase(), Phase::Submitting);

    let result = AnalysisResult {
        experience_level: "Intermediate".to_string(),
        ..AnalysisResult::default()
    };
    let (state, _) = update(
        state,
        Msg::AnalysisSucceeded {
            request_id: 2,
            result: result.clone(),
        },
    );
    assert_eq!(state.phase(), Phase::ShowingResults);
    assert_eq!(state.result(), Some(&result));
}

#[test]
fn failure_keeps_earlier_result_visible() {
    init_logging();
    let (state, _) = update(filled_form("SRE", ""), Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::AnalysisSucceeded {
            request_id: 1,
            result: AnalysisResult {
                education: "BS CS".to_string(),
                ..AnalysisResult::default()
            },
        },
    );
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::AnalysisFailed {
            request_id: 2,
            message: "later failure".to_string(),
        },
    );

    let view = state.view();
    assert_eq!(view.error.as_deref(), Some("later failure"));
    assert_eq!(view.results.unwrap().profile.education, "BS CS");
}

#[test]
fn stale_completion_is_ignored() {
    init_logging();
    let (state, _) = update(filled_form("SRE", ""), Msg::SubmitClicked);

    let (state, _) = update(
        state,
        Msg::AnalysisFailed {
            request_id: 99,
            message: "not ours".to_string(),
        },
    );

    assert_eq!(state.phase(), Phase::Submitting);
    assert_eq!(state.in_flight(), Some(1));
    assert_eq!(state.view().error, None);
}
