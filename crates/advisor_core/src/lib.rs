//! Advisor core: pure form/result state machine and view-model helpers.
mod analysis;
mod drop_zone;
mod effect;
mod msg;
mod state;
mod submission;
mod update;
mod view_model;

pub use analysis::{AnalysisResult, Course, GithubActivity, Opening, Recommendations};
pub use drop_zone::{
    parse_dropped_paths, parse_typed_path, DocumentSlot, DropRejection, DropZone, PdfDocument,
};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Phase, RequestId};
pub use submission::{Submission, GITHUB_PROFILE_FIELD, POSITION_FIELD};
pub use update::update;
pub use view_model::{
    ActivityView, AppViewModel, DropZoneView, LinkView, ProfileView, ResultsView, SubmitView,
    BUSY_LABEL, NOT_AVAILABLE, NO_ACTIVITY, SPINNER_FRAMES, SUBMIT_LABEL,
};
