use std::sync::{Arc, Mutex};
use std::time::Duration;

use advisor_core::{AnalysisResult, PdfDocument, Submission};
use advisor_engine::{
    part_names, AnalysisClient, AnalysisError, EngineEvent, EngineHandle, FailureKind,
};

/// Records submissions and answers from a fixed script.
struct ScriptedClient {
    seen: Arc<Mutex<Vec<Submission>>>,
    fail: bool,
}

#[async_trait::async_trait]
impl AnalysisClient for ScriptedClient {
    async fn analyze(&self, submission: &Submission) -> Result<AnalysisResult, AnalysisError> {
        self.seen.lock().unwrap().push(submission.clone());
        if self.fail {
            Err(AnalysisError {
                kind: FailureKind::HttpStatus(400),
                server_message: Some("Invalid transcript".to_string()),
                detail: "400 Bad Request".to_string(),
            })
        } else {
            Ok(AnalysisResult {
                experience_level: "Intermediate".to_string(),
                ..AnalysisResult::default()
            })
        }
    }
}

fn submission(profile: Option<&str>) -> Submission {
    Submission {
        desired_position: "Analyst".to_string(),
        transcript: PdfDocument::from_path("/docs/t.pdf"),
        resume: PdfDocument::from_path("/docs/r.pdf"),
        github_profile: profile.map(ToOwned::to_owned),
    }
}

fn wait(engine: &EngineHandle) -> EngineEvent {
    engine
        .recv_timeout(Duration::from_secs(5))
        .expect("engine running")
        .expect("engine event")
}

#[test]
fn completion_carries_request_id_and_result() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let engine = EngineHandle::with_client(Arc::new(ScriptedClient {
        seen: seen.clone(),
        fail: false,
    }));

    engine.submit(7, submission(None));

    match wait(&engine) {
        EngineEvent::AnalysisCompleted { request_id, result } => {
            assert_eq!(request_id, 7);
            assert_eq!(result.unwrap().experience_level, "Intermediate");
        }
    }
    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(engine.try_recv(), Ok(None));
}

#[test]
fn failure_keeps_server_message() {
    let engine = EngineHandle::with_client(Arc::new(ScriptedClient {
        seen: Arc::new(Mutex::new(Vec::new())),
        fail: true,
    }));

    engine.submit(3, submission(None));

    match wait(&engine) {
        EngineEvent::AnalysisCompleted { request_id, result } => {
            assert_eq!(request_id, 3);
            assert_eq!(result.unwrap_err().user_message(), "Invalid transcript");
        }
    }
}

#[test]
fn part_names_follow_profile_presence() {
    assert_eq!(
        part_names(&submission(None)),
        vec!["desired_position", "transcript", "resume"]
    );
    assert_eq!(
        part_names(&submission(Some("https://github.com/x"))),
        vec!["desired_position", "transcript", "resume", "github_profile"]
    );
}
