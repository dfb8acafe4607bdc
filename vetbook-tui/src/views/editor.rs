//! Playbook editor: scalar fields as text areas plus a managed list of
//! escalation paths with a modal sub-form.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use tui_textarea::TextArea;

use crate::state::{App, EditorFocus, EditorState, PathForm};
use crate::theme::{action_color, Theme};
use crate::views::centered_rect;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(editor) = app.editor.as_ref() else {
        return;
    };
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    render_field(
        frame,
        &editor.title,
        "Title",
        editor.focus == EditorFocus::Title,
        theme,
        chunks[0],
    );
    render_field(
        frame,
        &editor.description,
        "Description",
        editor.focus == EditorFocus::Description,
        theme,
        chunks[1],
    );
    render_field(
        frame,
        &editor.category,
        "Category",
        editor.focus == EditorFocus::Category,
        theme,
        chunks[2],
    );
    render_paths(frame, editor, theme, chunks[3]);

    if let Some(error) = &editor.error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.clone(),
                Style::default().fg(theme.danger),
            )),
            chunks[4],
        );
    }

    if let Some(form) = editor.path_form.as_ref() {
        render_path_form(frame, form, theme, area);
    }
}

fn border_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        Style::default().fg(theme.border_focus)
    } else {
        Style::default().fg(theme.border)
    }
}

fn render_field(
    frame: &mut Frame,
    field: &TextArea<'static>,
    title: &str,
    focused: bool,
    theme: &Theme,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused, theme))
        .title(format!(" {title} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(field.widget(), inner);
}

fn render_paths(frame: &mut Frame, editor: &EditorState, theme: &Theme, area: Rect) {
    let focused = editor.focus == EditorFocus::Paths;

    let items: Vec<ListItem> = if editor.paths.is_empty() {
        vec![ListItem::new(Span::styled(
            "No escalation paths yet - press a to add one",
            Style::default().fg(theme.text_dim),
        ))]
    } else {
        editor
            .paths
            .iter()
            .map(|path| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", path.action.label()),
                        Style::default()
                            .fg(theme.bg)
                            .bg(action_color(&path.action, theme)),
                    ),
                    Span::raw(" "),
                    Span::styled(path.name.clone(), Style::default().fg(theme.text)),
                    Span::styled(
                        format!("  {} conditions", path.conditions.len()),
                        Style::default().fg(theme.text_dim),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused, theme))
                .title(" Escalation paths (a add · enter edit · d delete) "),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if focused && !editor.paths.is_empty() {
        state.select(Some(editor.selected_path));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_path_form(frame: &mut Frame, form: &PathForm, theme: &Theme, area: Rect) {
    let dialog = centered_rect(70, 70, area);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focus))
        .title(" Escalation path (ctrl+s apply · esc cancel) ")
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(inner);

    render_field(frame, &form.name, "Name", form.focus == 0, theme, chunks[0]);
    render_field(
        frame,
        &form.action,
        "Action (verify, consult, avoid, ...)",
        form.focus == 1,
        theme,
        chunks[1],
    );
    render_field(
        frame,
        &form.description,
        "Description",
        form.focus == 2,
        theme,
        chunks[2],
    );
    render_field(
        frame,
        &form.conditions,
        "Conditions (one per line)",
        form.focus == 3,
        theme,
        chunks[3],
    );
}
