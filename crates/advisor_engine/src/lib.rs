//! Advisor engine: uploads submissions to the analysis service.
mod client;
mod decode;
mod engine;
mod form;
mod types;

pub use client::{
    AnalysisClient, ClientSettings, ReqwestAnalysisClient, ANALYZE_PATH, DEFAULT_ENDPOINT,
};
pub use decode::{decode_success, extract_error_message};
pub use engine::EngineHandle;
pub use form::{build_form, part_names};
pub use types::{AnalysisError, EngineEvent, EngineStopped, FailureKind, GENERIC_ERROR_MESSAGE};
