//! Playbook list view: built-in templates first, then user records.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use vetbook_core::is_builtin_template;

use crate::state::App;
use crate::views::centered_rect;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let items: Vec<ListItem> = app
        .playbooks
        .iter()
        .map(|playbook| {
            let mut spans = vec![Span::styled(
                playbook.title.clone(),
                Style::default().fg(theme.text),
            )];
            if is_builtin_template(&playbook.id) {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    "[template]",
                    Style::default().fg(theme.scrutiny),
                ));
            } else if let Some(category) = &playbook.category {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    category.clone(),
                    Style::default().fg(theme.text_dim),
                ));
            }
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!(
                    "{} paths · updated {}",
                    playbook.escalation_paths.len(),
                    playbook.updated_at.format("%Y-%m-%d")
                ),
                Style::default().fg(theme.text_dim),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" Playbooks ({}) ", app.playbooks.len())),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);

    if app.pending_delete.is_some() {
        render_delete_confirmation(frame, app, area);
    }
}

fn render_delete_confirmation(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let dialog = centered_rect(50, 20, area);

    let title = app
        .selected_playbook()
        .map(|p| p.title.clone())
        .unwrap_or_default();

    frame.render_widget(Clear, dialog);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Delete \"{title}\"?"),
                Style::default().fg(theme.text),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("y", Style::default().fg(theme.danger).add_modifier(Modifier::BOLD)),
                Span::styled(" confirm · any other key cancels", Style::default().fg(theme.text_dim)),
            ]),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.danger))
                .title(" Confirm delete ")
                .style(Style::default().bg(theme.surface)),
        ),
        dialog,
    );
}
