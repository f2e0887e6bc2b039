use crate::{RequestId, Submission};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Upload the documents and ask the service for an analysis.
    SubmitAnalysis {
        request_id: RequestId,
        submission: Submission,
    },
}
