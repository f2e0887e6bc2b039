use crate::{AnalysisResult, DocumentSlot, DropZone, GithubActivity, Phase};

pub const SUBMIT_LABEL: &str = "Analyze Profile";
pub const BUSY_LABEL: &str = "Analyzing...";
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
/// Shown for activity counters the service did not report.
pub const NOT_AVAILABLE: &str = "n/a";
pub const NO_ACTIVITY: &str = "No repository activity reported";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub phase: Phase,
    pub position: String,
    pub github_profile: String,
    pub transcript: DropZoneView,
    pub resume: DropZoneView,
    pub submit: SubmitView,
    pub error: Option<String>,
    pub results: Option<ResultsView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZoneView {
    pub slot: DocumentSlot,
    /// File name when filled, otherwise the drop hint.
    pub text: String,
    pub filled: bool,
    pub notice: Option<String>,
}

impl DropZoneView {
    pub(crate) fn from_zone(zone: &DropZone) -> Self {
        let slot = zone.slot();
        Self {
            slot,
            text: zone
                .file()
                .map(|file| file.name.clone())
                .unwrap_or_else(|| slot.placeholder().to_string()),
            filled: zone.file().is_some(),
            notice: zone.rejection().map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitView {
    pub enabled: bool,
    pub busy: bool,
    pub label: String,
}

impl SubmitView {
    pub(crate) fn new(enabled: bool, busy: bool, spinner_frame: usize) -> Self {
        let label = if busy {
            let frame = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
            format!("{frame} {BUSY_LABEL}")
        } else {
            SUBMIT_LABEL.to_string()
        };
        Self {
            enabled,
            busy,
            label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub profile: ProfileView,
    pub activity: ActivityView,
    pub courses: Vec<LinkView>,
    pub internships: Vec<LinkView>,
    pub jobs: Vec<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub experience_level: String,
    pub education: String,
    pub skills: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityView {
    pub repositories: String,
    pub languages: String,
    pub stars: String,
    pub forks: String,
    /// Lookup error from the service, or a note that nothing was reported.
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub label: String,
    pub link_text: &'static str,
    pub url: String,
}

impl ResultsView {
    pub(crate) fn from_result(result: &AnalysisResult) -> Self {
        let recommendations = &result.recommendations;
        Self {
            profile: ProfileView {
                experience_level: result.experience_level.clone(),
                education: result.education.clone(),
                skills: result.skills.join(", "),
            },
            activity: ActivityView::from_activity(&result.github_data),
            courses: recommendations
                .courses
                .iter()
                .map(|course| LinkView {
                    label: course.title.clone(),
                    link_text: "View Course",
                    url: course.url.clone(),
                })
                .collect(),
            internships: recommendations
                .internships
                .iter()
                .map(|opening| LinkView {
                    label: opening.name.clone(),
                    link_text: "View Internship",
                    url: opening.url.clone(),
                })
                .collect(),
            jobs: recommendations
                .jobs
                .iter()
                .map(|opening| LinkView {
                    label: opening.name.clone(),
                    link_text: "View Job",
                    url: opening.url.clone(),
                })
                .collect(),
        }
    }
}

impl ActivityView {
    fn from_activity(activity: &GithubActivity) -> Self {
        Self {
            repositories: count_text(activity.repositories),
            languages: activity.languages.join(", "),
            stars: count_text(activity.stars),
            forks: count_text(activity.forks),
            notice: match &activity.error {
                Some(error) => Some(error.clone()),
                None if activity.is_empty() => Some(NO_ACTIVITY.to_string()),
                None => None,
            },
        }
    }
}

fn count_text(value: Option<u64>) -> String {
    value
        .map(|count| count.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
