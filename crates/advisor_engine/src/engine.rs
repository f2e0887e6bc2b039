use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use advisor_core::{RequestId, Submission};
use advisor_logging::{advisor_error, advisor_info, advisor_warn};

use crate::client::{AnalysisClient, ClientSettings, ReqwestAnalysisClient};
use crate::{AnalysisError, EngineEvent, EngineStopped, FailureKind};

enum EngineCommand {
    Submit {
        request_id: RequestId,
        submission: Submission,
    },
}

/// Runs analysis requests on a background tokio runtime and reports
/// completions as [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Self {
        Self::with_client(Arc::new(ReqwestAnalysisClient::new(settings)))
    }

    pub fn with_client(client: Arc<dyn AnalysisClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    advisor_error!("Failed to start engine runtime: {}", err);
                    fail_all(cmd_rx, event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, request_id: RequestId, submission: Submission) {
        if self
            .cmd_tx
            .send(EngineCommand::Submit {
                request_id,
                submission,
            })
            .is_err()
        {
            advisor_warn!("Engine stopped; request {} dropped", request_id);
        }
    }

    /// `Ok(None)` when nothing has arrived yet.
    pub fn try_recv(&self) -> Result<Option<EngineEvent>, EngineStopped> {
        match self.event_rx.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(EngineStopped),
        }
    }

    /// `Ok(None)` when the timeout elapsed first.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<EngineEvent>, EngineStopped> {
        wait_for_event(&self.event_rx, timeout)
    }
}

fn wait_for_event(
    event_rx: &mpsc::Receiver<EngineEvent>,
    timeout: Duration,
) -> Result<Option<EngineEvent>, EngineStopped> {
    match event_rx.recv_timeout(timeout) {
        Ok(event) => Ok(Some(event)),
        Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            advisor_error!("Engine thread exited");
            Err(EngineStopped)
        }
    }
}

async fn handle_command(
    client: &dyn AnalysisClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            request_id,
            submission,
        } => {
            let result = client.analyze(&submission).await;
            match &result {
                Ok(_) => advisor_info!("Request {} succeeded", request_id),
                Err(err) => advisor_warn!("Request {} failed: {}", request_id, err),
            }
            let _ = event_tx.send(EngineEvent::AnalysisCompleted { request_id, result });
        }
    }
}

fn fail_all(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    detail: &str,
) {
    while let Ok(EngineCommand::Submit { request_id, .. }) = cmd_rx.recv() {
        let _ = event_tx.send(EngineEvent::AnalysisCompleted {
            request_id,
            result: Err(AnalysisError::new(FailureKind::Network, detail)),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_event_channel_reports_stopped() {
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();
        drop(event_tx);

        assert_eq!(
            wait_for_event(&event_rx, Duration::from_secs(5)),
            Err(EngineStopped)
        );
    }

    #[test]
    fn quiet_channel_times_out_without_error() {
        let (_event_tx, event_rx) = mpsc::channel::<EngineEvent>();

        assert_eq!(wait_for_event(&event_rx, Duration::from_millis(10)), Ok(None));
    }
}
