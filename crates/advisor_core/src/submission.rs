use crate::PdfDocument;

pub const POSITION_FIELD: &str = "desired_position";
pub const GITHUB_PROFILE_FIELD: &str = "github_profile";

/// Everything one analysis request carries. Only constructible from a
/// complete form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub desired_position: String,
    pub transcript: PdfDocument,
    pub resume: PdfDocument,
    pub github_profile: Option<String>,
}

impl Submission {
    /// Returns `None` unless the position is non-empty and both documents are
    /// present. An empty profile URL is left out of the request entirely.
    pub fn from_form(
        desired_position: &str,
        github_profile: &str,
        transcript: Option<&PdfDocument>,
        resume: Option<&PdfDocument>,
    ) -> Option<Self> {
        if desired_position.is_empty() {
            return None;
        }
        Some(Self {
            desired_position: desired_position.to_owned(),
            transcript: transcript?.clone(),
            resume: resume?.clone(),
            github_profile: (!github_profile.is_empty()).then(|| github_profile.to_owned()),
        })
    }
}
