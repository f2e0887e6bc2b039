use std::path::PathBuf;
use std::time::Duration;

use advisor_core::{update, AppState, DocumentSlot, Msg, PdfDocument};
use advisor_engine::ClientSettings;
use advisor_logging::advisor_info;
use anyhow::{bail, Result};

use super::effects::EffectRunner;
use super::ui::text::render_text;

const WAIT_SLICE: Duration = Duration::from_millis(250);

/// Form values given on the command line.
#[derive(Debug, Clone)]
pub struct HeadlessForm {
    pub position: String,
    pub transcript: PathBuf,
    pub resume: PathBuf,
    pub github_profile: Option<String>,
}

impl HeadlessForm {
    fn messages(&self) -> Vec<Msg> {
        vec![
            Msg::PositionChanged(self.position.clone()),
            Msg::FilesDropped {
                slot: DocumentSlot::Transcript,
                files: vec![PdfDocument::from_path(&self.transcript)],
            },
            Msg::FilesDropped {
                slot: DocumentSlot::Resume,
                files: vec![PdfDocument::from_path(&self.resume)],
            },
            Msg::GithubProfileChanged(self.github_profile.clone().unwrap_or_default()),
        ]
    }
}

/// Fills the form, submits once, and waits for the outcome. Returns the text
/// rendering and whether the analysis succeeded.
pub fn run_analyze(form: &HeadlessForm, settings: ClientSettings) -> Result<(String, bool)> {
    let mut state = AppState::new();
    for msg in form.messages() {
        state = update(state, msg).0;
    }

    let view = state.view();
    for zone in [&view.transcript, &view.resume] {
        if let Some(notice) = &zone.notice {
            bail!("{}: {}", zone.slot.label(), notice);
        }
    }
    if view.position.is_empty() {
        bail!("Desired position must not be empty");
    }

    let (mut state, effects) = update(state, Msg::SubmitClicked);
    if effects.is_empty() {
        bail!("Form is incomplete; nothing was submitted");
    }

    let runner = EffectRunner::new(settings);
    runner.enqueue(effects);
    advisor_info!("Waiting for analysis");

    // No overall deadline: the request timeout (if configured) bounds the wait.
    while state.in_flight().is_some() {
        match runner.wait(WAIT_SLICE) {
            Ok(Some(msg)) => state = update(state, msg).0,
            Ok(None) => state = update(state, Msg::Tick).0,
            Err(stopped) => bail!("{stopped} before the analysis completed"),
        }
    }

    let view = state.view();
    Ok((render_text(&view), view.error.is_none()))
}
