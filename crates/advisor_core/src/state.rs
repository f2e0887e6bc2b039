use advisor_logging::{advisor_debug, advisor_info};

use crate::view_model::{AppViewModel, DropZoneView, ResultsView, SubmitView};
use crate::{AnalysisResult, DocumentSlot, DropZone, PdfDocument, Submission};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    ShowingResults,
    ShowingError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    position: String,
    github_profile: String,
    transcript: DropZone,
    resume: DropZone,
    phase: Phase,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    result: Option<AnalysisResult>,
    error: Option<String>,
    spinner_frame: usize,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            position: String::new(),
            github_profile: String::new(),
            transcript: DropZone::new(DocumentSlot::Transcript),
            resume: DropZone::new(DocumentSlot::Resume),
            phase: Phase::Idle,
            in_flight: None,
            next_request_id: 1,
            result: None,
            error: None,
            spinner_frame: 0,
            dirty: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn drop_zone(&self, slot: DocumentSlot) -> &DropZone {
        match slot {
            DocumentSlot::Transcript => &self.transcript,
            DocumentSlot::Resume => &self.resume,
        }
    }

    fn drop_zone_mut(&mut self, slot: DocumentSlot) -> &mut DropZone {
        match slot {
            DocumentSlot::Transcript => &mut self.transcript,
            DocumentSlot::Resume => &mut self.resume,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.in_flight.is_none() && self.pending_submission().is_some()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            position: self.position.clone(),
            github_profile: self.github_profile.clone(),
            transcript: DropZoneView::from_zone(&self.transcript),
            resume: DropZoneView::from_zone(&self.resume),
            submit: SubmitView::new(self.can_submit(), self.in_flight.is_some(), self.spinner_frame),
            error: self.error.clone(),
            results: self.result.as_ref().map(ResultsView::from_result),
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_position(&mut self, position: String) {
        if self.position != position {
            self.position = position;
            self.dirty = true;
        }
    }

    pub(crate) fn set_github_profile(&mut self, profile: String) {
        if self.github_profile != profile {
            self.github_profile = profile;
            self.dirty = true;
        }
    }

    pub(crate) fn drop_files(&mut self, slot: DocumentSlot, files: Vec<PdfDocument>) {
        match self.drop_zone_mut(slot).accept(files) {
            Ok(()) => advisor_info!("{} set", slot.label()),
            Err(rejection) => advisor_info!("{} drop rejected: {}", slot.label(), rejection),
        }
        self.dirty = true;
    }

    /// Moves to `Submitting` and hands out the request to run. Returns `None`
    /// when the form is incomplete or a request is already outstanding.
    pub(crate) fn begin_submission(&mut self) -> Option<(RequestId, Submission)> {
        if let Some(outstanding) = self.in_flight {
            advisor_debug!("Submit ignored; request {} still outstanding", outstanding);
            return None;
        }
        let submission = self.pending_submission()?;

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);
        self.phase = Phase::Submitting;
        self.error = None;
        self.spinner_frame = 0;
        self.dirty = true;
        Some((request_id, submission))
    }

    pub(crate) fn apply_success(&mut self, request_id: RequestId, result: AnalysisResult) {
        if !self.finish_request(request_id) {
            return;
        }
        self.result = Some(result);
        self.phase = Phase::ShowingResults;
    }

    /// A failure keeps any earlier result on screen below the error.
    pub(crate) fn apply_failure(&mut self, request_id: RequestId, message: String) {
        if !self.finish_request(request_id) {
            return;
        }
        self.error = Some(message);
        self.phase = Phase::ShowingError;
    }

    pub(crate) fn advance_spinner(&mut self) {
        if self.in_flight.is_some() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            self.dirty = true;
        }
    }

    fn finish_request(&mut self, request_id: RequestId) -> bool {
        if self.in_flight != Some(request_id) {
            advisor_debug!("Dropping completion for stale request {}", request_id);
            return false;
        }
        self.in_flight = None;
        self.dirty = true;
        true
    }

    fn pending_submission(&self) -> Option<Submission> {
        Submission::from_form(
            &self.position,
            &self.github_profile,
            self.transcript.file(),
            self.resume.file(),
        )
    }
}
