use advisor_core::{AppViewModel, DropZoneView, LinkView, ResultsView, SubmitView};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::input::{Focus, UiState};
use super::keymap::KeyMap;
use super::layout::{self, Regions};

const FILLED_ZONE: Color = Color::LightBlue;

pub fn render(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let regions = layout::split(frame.area(), view.error.is_some());

    frame.render_widget(
        Paragraph::new("AI Career Path Advisor")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        regions.title,
    );

    render_text_field(
        frame,
        regions.position,
        "Desired Position *",
        &view.position,
        ui.focus == Focus::Position,
    );
    render_drop_zone(
        frame,
        regions.transcript,
        &view.transcript,
        ui.path_input(view.transcript.slot),
        ui.focus == Focus::Transcript,
    );
    render_drop_zone(
        frame,
        regions.resume,
        &view.resume,
        ui.path_input(view.resume.slot),
        ui.focus == Focus::Resume,
    );
    render_text_field(
        frame,
        regions.github_profile,
        "GitHub Profile URL (optional)",
        &view.github_profile,
        ui.focus == Focus::GithubProfile,
    );
    render_submit(frame, regions.submit, &view.submit, ui.focus == Focus::Submit);

    if let Some(error) = &view.error {
        frame.render_widget(
            Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL).title("Error")),
            regions.error,
        );
    }

    if let Some(results) = &view.results {
        render_results(frame, &regions, results);
    }

    render_help(frame, regions.help);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn render_text_field(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let text = if focused {
        format!("{value}_")
    } else {
        value.to_string()
    };
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused))
                .title(title.to_string()),
        ),
        area,
    );
}

/// One widget for both document slots; only the view differs.
fn render_drop_zone(
    frame: &mut Frame,
    area: Rect,
    zone: &DropZoneView,
    typed: &str,
    focused: bool,
) {
    let name_style = if zone.filled {
        Style::default().fg(FILLED_ZONE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut lines = vec![Line::from(Span::styled(zone.text.clone(), name_style))];
    if focused {
        lines.push(Line::from(vec![
            Span::styled("path: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{typed}_")),
        ]));
    }
    if let Some(notice) = &zone.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style(focused))
                    .title(zone.slot.label()),
            ),
        area,
    );
}

fn render_submit(frame: &mut Frame, area: Rect, submit: &SubmitView, focused: bool) {
    let style = match (submit.enabled, submit.busy) {
        (_, true) => Style::default().fg(Color::Cyan),
        (true, false) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    frame.render_widget(
        Paragraph::new(submit.label.clone())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style(focused)),
            ),
        area,
    );
}

fn render_results(frame: &mut Frame, regions: &Regions, results: &ResultsView) {
    let profile = &results.profile;
    frame.render_widget(
        labelled_list(
            "Profile Analysis",
            &[
                ("Experience Level", profile.experience_level.as_str()),
                ("Education", profile.education.as_str()),
                ("Skills", profile.skills.as_str()),
            ],
            None,
        ),
        regions.profile,
    );

    let activity = &results.activity;
    frame.render_widget(
        labelled_list(
            "GitHub Activity",
            &[
                ("Repositories", activity.repositories.as_str()),
                ("Languages", activity.languages.as_str()),
                ("Stars", activity.stars.as_str()),
                ("Forks", activity.forks.as_str()),
            ],
            activity.notice.as_deref(),
        ),
        regions.activity,
    );

    frame.render_widget(link_list("Courses", &results.courses), regions.courses);
    frame.render_widget(
        link_list("Internships", &results.internships),
        regions.internships,
    );
    frame.render_widget(link_list("Jobs", &results.jobs), regions.jobs);
}

fn labelled_list(title: &str, rows: &[(&str, &str)], notice: Option<&str>) -> Paragraph<'static> {
    let mut lines: Vec<Line<'static>> = rows
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{label}: "),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(value.to_string()),
            ])
        })
        .collect();
    if let Some(notice) = notice {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Yellow),
        )));
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
}

fn link_list(title: &str, links: &[LinkView]) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = links
        .iter()
        .flat_map(|link| {
            [
                Line::from(Span::styled(
                    link.label.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{}: {}", link.link_text, link.url),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                )),
            ]
        })
        .collect();
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
}

fn render_help(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = KeyMap::help_text()
        .into_iter()
        .flat_map(|(keys, action)| {
            [
                Span::styled(keys, Style::default().fg(Color::Yellow)),
                Span::raw(format!(" {action}  ")),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
