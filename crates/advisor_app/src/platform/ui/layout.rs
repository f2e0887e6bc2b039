use ratatui::layout::{Constraint, Layout, Rect};

pub const ERROR_BANNER_HEIGHT: u16 = 3;

/// Screen regions for one frame. The error banner collapses when there is no
/// error to show.
pub struct Regions {
    pub title: Rect,
    pub position: Rect,
    pub transcript: Rect,
    pub resume: Rect,
    pub github_profile: Rect,
    pub submit: Rect,
    pub error: Rect,
    pub profile: Rect,
    pub activity: Rect,
    pub courses: Rect,
    pub internships: Rect,
    pub jobs: Rect,
    pub help: Rect,
}

pub fn split(area: Rect, has_error: bool) -> Regions {
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(if has_error { ERROR_BANNER_HEIGHT } else { 0 }),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .split(area);

    let zones = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let results = Layout::vertical([Constraint::Length(7), Constraint::Min(4)]).split(rows[6]);
    let summary = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(results[0]);
    let recommendations = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(results[1]);

    Regions {
        title: rows[0],
        position: rows[1],
        transcript: zones[0],
        resume: zones[1],
        github_profile: rows[3],
        submit: rows[4],
        error: rows[5],
        profile: summary[0],
        activity: summary[1],
        courses: recommendations[0],
        internships: recommendations[1],
        jobs: recommendations[2],
        help: rows[7],
    }
}
