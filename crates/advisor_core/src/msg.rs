use crate::{AnalysisResult, DocumentSlot, PdfDocument, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the desired position.
    PositionChanged(String),
    /// User edited the optional profile URL.
    GithubProfileChanged(String),
    /// Files were dropped (or browsed) onto a drop zone.
    FilesDropped {
        slot: DocumentSlot,
        files: Vec<PdfDocument>,
    },
    /// User pressed the submit control.
    SubmitClicked,
    /// Engine finished a request successfully.
    AnalysisSucceeded {
        request_id: RequestId,
        result: AnalysisResult,
    },
    /// Engine finished a request with a user-facing error message.
    AnalysisFailed {
        request_id: RequestId,
        message: String,
    },
    /// UI tick; advances the busy indicator.
    Tick,
}
