//! View rendering.
//!
//! Every render function is a pure function of `(state, theme)`; the
//! theme travels as an explicit argument via [`crate::state::App`].

pub mod editor;
pub mod list;
pub mod viewer;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::notifications::NotificationLevel;
use crate::state::{App, View};

/// Render the full frame for the current view.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.size();

    let background = Block::default().style(Style::default().bg(theme.bg).fg(theme.text));
    frame.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    match app.view {
        View::List => list::render(frame, app, chunks[1]),
        View::Viewer => viewer::render(frame, app, chunks[1]),
        View::Editor => editor::render(frame, app, chunks[1]),
    }
    render_footer(frame, app, chunks[2]);
    render_notifications(frame, app, chunks[1]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let subtitle = match app.view {
        View::List => "Validation Playbooks",
        View::Viewer => "Playbook",
        View::Editor => "Editor",
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " VETBOOK ",
            Style::default()
                .fg(theme.bg)
                .bg(theme.border_focus)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(subtitle, Style::default().fg(theme.text)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let hints = match app.view {
        View::List => {
            "enter view · n new · e edit · d delete · r refresh · t theme · q quit"
        }
        View::Viewer => "y/n answer · r start over · e edit · esc back",
        View::Editor => {
            "tab next field · a/enter/d manage paths · ctrl+s save · esc discard"
        }
    };
    let footer = Paragraph::new(Span::styled(hints, Style::default().fg(theme.text_dim)));
    frame.render_widget(footer, area);
}

/// Draw up to the three newest notification banners over the bottom of
/// the body area.
fn render_notifications(frame: &mut Frame, app: &App, area: Rect) {
    if app.notifications.is_empty() {
        return;
    }
    let theme = &app.theme;

    let newest: Vec<&crate::notifications::Notification> =
        app.notifications.iter().rev().take(3).collect();
    let height = newest.len() as u16;
    if area.height <= height {
        return;
    }

    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height - height,
        width: area.width,
        height,
    };

    let lines: Vec<Line> = newest
        .iter()
        .rev()
        .map(|note| {
            let color = match note.level {
                NotificationLevel::Info => theme.info,
                NotificationLevel::Success => theme.positive,
                NotificationLevel::Warning => theme.attention,
                NotificationLevel::Error => theme.danger,
            };
            Line::from(Span::styled(
                format!(" {} ", note.message),
                Style::default().fg(theme.bg).bg(color),
            ))
        })
        .collect();

    frame.render_widget(Clear, banner_area);
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme.surface)),
        banner_area,
    );
}

/// Center a `percent_x` by `percent_y` rectangle inside `area`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
