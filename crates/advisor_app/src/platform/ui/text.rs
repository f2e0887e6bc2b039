//! Plain-text rendering of the view model, used by the headless command.

use std::fmt::Write;

use advisor_core::{AppViewModel, LinkView, ResultsView};

pub fn render_text(view: &AppViewModel) -> String {
    let mut out = String::new();

    if let Some(error) = &view.error {
        let _ = writeln!(out, "Error: {error}");
    }
    if let Some(results) = &view.results {
        if !out.is_empty() {
            out.push('\n');
        }
        render_results(&mut out, results);
    }
    out
}

fn render_results(out: &mut String, results: &ResultsView) {
    let profile = &results.profile;
    let _ = writeln!(out, "Profile Analysis");
    let _ = writeln!(out, "  Experience Level: {}", profile.experience_level);
    let _ = writeln!(out, "  Education: {}", profile.education);
    let _ = writeln!(out, "  Skills: {}", profile.skills);

    let activity = &results.activity;
    let _ = writeln!(out, "\nGitHub Activity");
    let _ = writeln!(out, "  Repositories: {}", activity.repositories);
    let _ = writeln!(out, "  Languages: {}", activity.languages);
    let _ = writeln!(out, "  Stars: {}", activity.stars);
    let _ = writeln!(out, "  Forks: {}", activity.forks);
    if let Some(notice) = &activity.notice {
        let _ = writeln!(out, "  Note: {notice}");
    }

    let _ = writeln!(out, "\nRecommendations");
    render_links(out, "Courses", &results.courses);
    render_links(out, "Internships", &results.internships);
    render_links(out, "Jobs", &results.jobs);
}

fn render_links(out: &mut String, heading: &str, links: &[LinkView]) {
    let _ = writeln!(out, "  {heading}");
    if links.is_empty() {
        let _ = writeln!(out, "    (none)");
    }
    for link in links {
        let _ = writeln!(out, "    - {} [{}: {}]", link.label, link.link_text, link.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::{
        update, AnalysisResult, AppState, Course, DocumentSlot, GithubActivity, Msg, PdfDocument,
        Recommendations,
    };
    use pretty_assertions::assert_eq;

    fn submitted() -> AppState {
        let mut state = AppState::new();
        for msg in [
            Msg::PositionChanged("Backend Developer".to_string()),
            Msg::FilesDropped {
                slot: DocumentSlot::Transcript,
                files: vec![PdfDocument::from_path("t.pdf")],
            },
            Msg::FilesDropped {
                slot: DocumentSlot::Resume,
                files: vec![PdfDocument::from_path("r.pdf")],
            },
            Msg::SubmitClicked,
        ] {
            state = update(state, msg).0;
        }
        state
    }

    #[test]
    fn renders_result_sections() {
        let result = AnalysisResult {
            experience_level: "Senior".to_string(),
            education: "BS CS".to_string(),
            skills: vec!["Go".to_string(), "SQL".to_string()],
            github_data: GithubActivity {
                repositories: Some(5),
                languages: vec!["Go".to_string()],
                stars: Some(10),
                forks: Some(2),
                ..GithubActivity::default()
            },
            recommendations: Recommendations {
                courses: vec![Course {
                    title: "X".to_string(),
                    url: "u".to_string(),
                }],
                ..Recommendations::default()
            },
        };
        let (state, _) = update(
            submitted(),
            Msg::AnalysisSucceeded {
                request_id: 1,
                result,
            },
        );

        let expected = "\
Profile Analysis
  Experience Level: Senior
  Education: BS CS
  Skills: Go, SQL

GitHub Activity
  Repositories: 5
  Languages: Go
  Stars: 10
  Forks: 2

Recommendations
  Courses
    - X [View Course: u]
  Internships
    (none)
  Jobs
    (none)
";
        assert_eq!(render_text(&state.view()), expected);
    }

    #[test]
    fn renders_error_banner_text() {
        let (state, _) = update(
            submitted(),
            Msg::AnalysisFailed {
                request_id: 1,
                message: "File too large".to_string(),
            },
        );
        assert_eq!(render_text(&state.view()), "Error: File too large\n");
    }
}
