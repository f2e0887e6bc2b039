use std::time::Duration;

use advisor_core::{Effect, Msg};
use advisor_engine::{ClientSettings, EngineEvent, EngineHandle, EngineStopped};
use advisor_logging::{advisor_info, advisor_warn};

/// Executes core effects on the engine and turns engine events back into
/// messages for `update`.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitAnalysis {
                    request_id,
                    submission,
                } => {
                    advisor_info!(
                        "SubmitAnalysis request_id={} position_len={} profile={}",
                        request_id,
                        submission.desired_position.len(),
                        submission.github_profile.is_some()
                    );
                    self.engine.submit(request_id, submission);
                }
            }
        }
    }

    /// Messages for every completion that has arrived so far.
    pub fn drain(&self) -> Result<Vec<Msg>, EngineStopped> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv()? {
            msgs.push(event_to_msg(event));
        }
        Ok(msgs)
    }

    pub fn wait(&self, timeout: Duration) -> Result<Option<Msg>, EngineStopped> {
        Ok(self.engine.recv_timeout(timeout)?.map(event_to_msg))
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalysisCompleted {
            request_id,
            result: Ok(result),
        } => Msg::AnalysisSucceeded { request_id, result },
        EngineEvent::AnalysisCompleted {
            request_id,
            result: Err(err),
        } => {
            advisor_warn!("Analysis {} failed: {}", request_id, err);
            Msg::AnalysisFailed {
                request_id,
                message: err.user_message(),
            }
        }
    }
}
