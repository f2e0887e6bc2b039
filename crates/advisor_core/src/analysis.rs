//! Typed shape of the analysis service's `data` payload.
//!
//! Every field defaults when absent so a partial payload still decodes into a
//! renderable value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub experience_level: String,
    pub education: String,
    pub skills: Vec<String>,
    pub github_data: GithubActivity,
    pub recommendations: Recommendations,
}

/// Repository activity for the optional profile URL.
///
/// The service sends an empty object when no profile was given, and an object
/// with only `error` (plus diagnostics we ignore) when the lookup failed, so
/// the counters are optional rather than zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubActivity {
    pub repositories: Option<u64>,
    pub languages: Vec<String>,
    pub stars: Option<u64>,
    pub forks: Option<u64>,
    pub activity_score: Option<u64>,
    pub username: Option<String>,
    pub error: Option<String>,
}

impl GithubActivity {
    /// True when the service reported nothing at all for the profile.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendations {
    pub courses: Vec<Course>,
    pub internships: Vec<Opening>,
    pub jobs: Vec<Opening>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    pub title: String,
    pub url: String,
}

/// An internship or job posting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Opening {
    pub name: String,
    pub url: String,
}
