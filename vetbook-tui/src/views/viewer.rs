//! Playbook viewer: record details on the left, the interactive
//! decision flow on the right.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use vetbook_core::{EscalationPath, MatchOutcome};

use crate::state::{App, ViewerState};
use crate::theme::{action_color, Theme};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(viewer) = app.viewer.as_ref() else {
        return;
    };
    let theme = &app.theme;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_details(frame, viewer, theme, columns[0]);
    render_decision(frame, viewer, theme, columns[1]);
}

fn render_details(frame: &mut Frame, viewer: &ViewerState, theme: &Theme, area: Rect) {
    let playbook = &viewer.playbook;
    let mut lines = vec![
        Line::from(Span::styled(
            playbook.title.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    if let Some(category) = &playbook.category {
        lines.push(Line::from(Span::styled(
            category.clone(),
            Style::default().fg(theme.scrutiny),
        )));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        playbook.description.clone(),
        Style::default().fg(theme.text_dim),
    )));
    lines.push(Line::default());

    for path in &playbook.escalation_paths {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", path.action.label()),
                Style::default()
                    .fg(theme.bg)
                    .bg(action_color(&path.action, theme)),
            ),
            Span::raw(" "),
            Span::styled(path.name.clone(), Style::default().fg(theme.text)),
        ]));
    }

    if let Some(resources) = &playbook.resources {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{} linked resources", resources.len()),
            Style::default().fg(theme.text_dim),
        )));
    }

    let details = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Details "),
    );
    frame.render_widget(details, area);
}

fn render_decision(frame: &mut Frame, viewer: &ViewerState, theme: &Theme, area: Rect) {
    let flow = &viewer.flow;

    let lines = match flow.outcome() {
        None => question_lines(viewer, theme),
        Some(MatchOutcome::PathListing(paths)) => listing_lines(paths, theme),
        Some(MatchOutcome::Selected(path)) => result_lines(path, theme),
    };

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focus))
            .title(" Decision guide "),
    );
    frame.render_widget(panel, area);
}

fn question_lines<'a>(viewer: &'a ViewerState, theme: &Theme) -> Vec<Line<'a>> {
    let flow = &viewer.flow;
    let (current, total) = flow.progress();
    let question = flow.current_question().unwrap_or_default();

    vec![
        Line::from(Span::styled(
            format!("Question {} of {}", current + 1, total),
            Style::default().fg(theme.text_dim),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Does your content involve or contain:",
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            question.to_string(),
            Style::default().fg(theme.text),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("[y] ", Style::default().fg(theme.positive)),
            Span::raw("Yes    "),
            Span::styled("[n] ", Style::default().fg(theme.danger)),
            Span::raw("No    "),
            Span::styled("[r] ", Style::default().fg(theme.text_dim)),
            Span::raw("Start over"),
        ]),
        Line::default(),
        Line::from(Span::styled(
            format!("Progress: {} conditions matched", flow.affirmed_count()),
            Style::default().fg(theme.text_dim),
        )),
    ]
}

fn listing_lines<'a>(paths: &'a [EscalationPath], theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Available Escalation Paths",
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "This playbook doesn't have specific conditions defined. \
             Here are the available escalation paths:",
            Style::default().fg(theme.text_dim),
        )),
        Line::default(),
    ];

    for path in paths {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", path.action.label()),
                Style::default()
                    .fg(theme.bg)
                    .bg(action_color(&path.action, theme)),
            ),
            Span::raw(" "),
            Span::styled(
                path.name.clone(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            path.description.clone(),
            Style::default().fg(theme.text_dim),
        )));
        lines.push(Line::default());
    }
    lines
}

fn result_lines<'a>(path: &'a EscalationPath, theme: &Theme) -> Vec<Line<'a>> {
    let color = action_color(&path.action, theme);
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", path.action.label()),
            Style::default()
                .fg(theme.bg)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            path.name.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            path.description.clone(),
            Style::default().fg(theme.text_dim),
        )),
        Line::default(),
        Line::from(Span::styled(
            "When content contains or involves:",
            Style::default().fg(theme.text),
        )),
    ];

    for (index, condition) in path.conditions.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", index + 1), Style::default().fg(color)),
            Span::styled(condition.clone(), Style::default().fg(theme.text)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Based on your answers, this escalation path best matches your \
         content validation needs. Press r to start over.",
        Style::default().fg(theme.text_dim),
    )));
    lines
}
