//! Application state and view state definitions.
//!
//! Key handling mutates state synchronously and hands storage work back
//! to the event loop as [`AppCommand`]s, so every gateway call stays on
//! the single cooperative flow.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;
use vetbook_core::{
    builtin_templates, is_builtin_template, validate_draft, DecisionFlow, EscalationAction,
    EscalationPath, Playbook, PlaybookPatch,
};

use crate::config::{ThemeMode, TuiConfig};
use crate::gateway::{PlaybookDraft, PlaybookService};
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::Theme;

/// Seconds a notification banner stays on screen.
const NOTIFICATION_TTL_SECS: i64 = 5;

/// Top-level navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Viewer,
    Editor,
}

/// Async work the event loop performs on behalf of the views.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Refresh,
    Delete(String),
    Save(PlaybookDraft),
    Update(String, PlaybookPatch),
}

/// Viewer state: the open playbook plus its in-progress decision flow.
///
/// The flow is per-session; leaving the viewer discards answers.
pub struct ViewerState {
    pub playbook: Playbook,
    pub flow: DecisionFlow,
}

impl ViewerState {
    pub fn new(playbook: Playbook) -> Self {
        let flow = DecisionFlow::new(playbook.escalation_paths.clone());
        Self { playbook, flow }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFocus {
    Title,
    Description,
    Category,
    Paths,
}

impl EditorFocus {
    fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Paths,
            Self::Paths => Self::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Title => Self::Paths,
            Self::Description => Self::Title,
            Self::Category => Self::Description,
            Self::Paths => Self::Category,
        }
    }
}

/// Sub-form for adding or editing one escalation path.
pub struct PathForm {
    /// Index into the editor's path list, or `None` when adding.
    pub index: Option<usize>,
    pub name: TextArea<'static>,
    pub action: TextArea<'static>,
    pub description: TextArea<'static>,
    /// One condition per line.
    pub conditions: TextArea<'static>,
    pub focus: usize,
}

pub const PATH_FORM_FIELDS: usize = 4;

impl PathForm {
    fn blank() -> Self {
        Self {
            index: None,
            name: text_area(""),
            action: text_area("review"),
            description: text_area(""),
            conditions: text_area(""),
            focus: 0,
        }
    }

    fn for_path(index: usize, path: &EscalationPath) -> Self {
        Self {
            index: Some(index),
            name: text_area(&path.name),
            action: text_area(path.action.as_str()),
            description: text_area(&path.description),
            conditions: text_area(&path.conditions.join("\n")),
            focus: 0,
        }
    }

    fn focused_area(&mut self) -> &mut TextArea<'static> {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.action,
            2 => &mut self.description,
            _ => &mut self.conditions,
        }
    }

    fn to_path(&self, fallback_id: String) -> EscalationPath {
        let action_text = single_line(&self.action);
        let action = if action_text.is_empty() {
            EscalationAction::Review
        } else {
            EscalationAction::from(action_text)
        };
        EscalationPath {
            id: fallback_id,
            name: single_line(&self.name),
            description: self.description.lines().join("\n").trim().to_string(),
            action,
            conditions: self
                .conditions
                .lines()
                .iter()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty())
                .collect(),
        }
    }
}

/// Editor state: textareas per scalar field plus the working path list.
pub struct EditorState {
    /// `None` = creating, `Some(id)` = editing an existing record.
    pub editing_id: Option<String>,
    pub title: TextArea<'static>,
    pub description: TextArea<'static>,
    pub category: TextArea<'static>,
    pub paths: Vec<EscalationPath>,
    pub selected_path: usize,
    pub focus: EditorFocus,
    pub path_form: Option<PathForm>,
    /// Inline validation message shown until the next save attempt.
    pub error: Option<String>,
}

impl EditorState {
    pub fn create() -> Self {
        Self {
            editing_id: None,
            title: text_area(""),
            description: text_area(""),
            category: text_area(""),
            paths: Vec::new(),
            selected_path: 0,
            focus: EditorFocus::Title,
            path_form: None,
            error: None,
        }
    }

    pub fn edit(playbook: &Playbook) -> Self {
        Self {
            editing_id: Some(playbook.id.clone()),
            title: text_area(&playbook.title),
            description: text_area(&playbook.description),
            category: text_area(playbook.category.as_deref().unwrap_or("")),
            paths: playbook.escalation_paths.clone(),
            selected_path: 0,
            focus: EditorFocus::Title,
            path_form: None,
            error: None,
        }
    }

    fn next_path_id(&self) -> String {
        (self.paths.len() + 1).to_string()
    }
}

fn text_area(initial: &str) -> TextArea<'static> {
    if initial.is_empty() {
        TextArea::default()
    } else {
        TextArea::new(initial.lines().map(str::to_string).collect())
    }
}

fn single_line(area: &TextArea<'static>) -> String {
    area.lines().join(" ").trim().to_string()
}

pub struct App {
    pub config: TuiConfig,
    pub theme: Theme,
    pub theme_mode: ThemeMode,
    pub gateway: Arc<dyn PlaybookService>,
    pub view: View,
    /// Built-in templates first, then user records.
    pub playbooks: Vec<Playbook>,
    pub selected: usize,
    pub viewer: Option<ViewerState>,
    pub editor: Option<EditorState>,
    /// Armed when a delete is awaiting confirmation.
    pub pending_delete: Option<String>,
    pub notifications: Vec<Notification>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: TuiConfig, gateway: Arc<dyn PlaybookService>) -> Self {
        let theme_mode = config.theme;
        Self {
            config,
            theme: Theme::from_mode(theme_mode),
            theme_mode,
            gateway,
            view: View::List,
            playbooks: builtin_templates().to_vec(),
            selected: 0,
            viewer: None,
            editor: None,
            pending_delete: None,
            notifications: Vec::new(),
            should_quit: false,
        }
    }

    /// Replace the user records, keeping templates at the top.
    pub fn set_user_playbooks(&mut self, user: Vec<Playbook>) {
        let mut playbooks = builtin_templates().to_vec();
        playbooks.extend(user);
        self.playbooks = playbooks;
        if self.selected >= self.playbooks.len() {
            self.selected = self.playbooks.len().saturating_sub(1);
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    /// Periodic housekeeping: expire notification banners.
    pub fn tick(&mut self) {
        self.notifications
            .retain(|note| !note.is_expired(NOTIFICATION_TTL_SECS));
    }

    pub fn selected_playbook(&self) -> Option<&Playbook> {
        self.playbooks.get(self.selected)
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = Theme::from_mode(self.theme_mode);
    }

    /// Route a key press, returning any storage work for the event loop.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match self.view {
            View::List => self.handle_list_key(key),
            View::Viewer => self.handle_viewer_key(key),
            View::Editor => self.handle_editor_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<AppCommand> {
        // A pending delete confirmation swallows everything else.
        if let Some(id) = self.pending_delete.clone() {
            match key.code {
                KeyCode::Char('y') => {
                    self.pending_delete = None;
                    return Some(AppCommand::Delete(id));
                }
                _ => {
                    self.pending_delete = None;
                    return None;
                }
            }
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.playbooks.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(playbook) = self.selected_playbook().cloned() {
                    self.viewer = Some(ViewerState::new(playbook));
                    self.view = View::Viewer;
                }
            }
            KeyCode::Char('n') => {
                self.editor = Some(EditorState::create());
                self.view = View::Editor;
            }
            KeyCode::Char('e') => {
                if let Some(playbook) = self.selected_playbook().cloned() {
                    if is_builtin_template(&playbook.id) {
                        self.notify(
                            NotificationLevel::Warning,
                            "Built-in templates cannot be edited",
                        );
                    } else {
                        self.editor = Some(EditorState::edit(&playbook));
                        self.view = View::Editor;
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(playbook) = self.selected_playbook().cloned() {
                    if is_builtin_template(&playbook.id) {
                        self.notify(
                            NotificationLevel::Warning,
                            "Built-in templates cannot be deleted",
                        );
                    } else {
                        self.pending_delete = Some(playbook.id);
                    }
                }
            }
            KeyCode::Char('r') => return Some(AppCommand::Refresh),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {}
        }
        None
    }

    fn handle_viewer_key(&mut self, key: KeyEvent) -> Option<AppCommand> {
        let Some(viewer) = self.viewer.as_mut() else {
            self.view = View::List;
            return None;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => {
                self.viewer = None;
                self.view = View::List;
            }
            KeyCode::Char('y') => viewer.flow.answer(true),
            KeyCode::Char('n') => viewer.flow.answer(false),
            KeyCode::Char('r') => viewer.flow.reset(),
            KeyCode::Char('e') => {
                let playbook = viewer.playbook.clone();
                if is_builtin_template(&playbook.id) {
                    self.notify(
                        NotificationLevel::Warning,
                        "Built-in templates cannot be edited",
                    );
                } else {
                    self.editor = Some(EditorState::edit(&playbook));
                    self.viewer = None;
                    self.view = View::Editor;
                }
            }
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {}
        }
        None
    }

    fn handle_editor_key(&mut self, key: KeyEvent) -> Option<AppCommand> {
        let Some(editor) = self.editor.as_mut() else {
            self.view = View::List;
            return None;
        };

        // The path sub-form captures input while open.
        if editor.path_form.is_some() {
            Self::handle_path_form_key(editor, key);
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                self.editor = None;
                self.view = View::List;
            }
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                return self.submit_editor();
            }
            (KeyCode::Tab, _) => editor.focus = editor.focus.next(),
            (KeyCode::BackTab, _) => editor.focus = editor.focus.previous(),
            _ if editor.focus == EditorFocus::Paths => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    editor.selected_path = editor.selected_path.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if editor.selected_path + 1 < editor.paths.len() {
                        editor.selected_path += 1;
                    }
                }
                KeyCode::Char('a') => editor.path_form = Some(PathForm::blank()),
                KeyCode::Enter => {
                    if let Some(path) = editor.paths.get(editor.selected_path) {
                        editor.path_form = Some(PathForm::for_path(editor.selected_path, path));
                    }
                }
                KeyCode::Char('d') => {
                    if editor.selected_path < editor.paths.len() {
                        editor.paths.remove(editor.selected_path);
                        if editor.selected_path > 0 {
                            editor.selected_path -= 1;
                        }
                    }
                }
                _ => {}
            },
            _ => {
                let area = match editor.focus {
                    EditorFocus::Title => &mut editor.title,
                    EditorFocus::Description => &mut editor.description,
                    EditorFocus::Category => &mut editor.category,
                    EditorFocus::Paths => return None,
                };
                area.input(key);
            }
        }
        None
    }

    fn handle_path_form_key(editor: &mut EditorState, key: KeyEvent) {
        let next_id = editor.next_path_id();
        let Some(form) = editor.path_form.as_mut() else {
            return;
        };

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => editor.path_form = None,
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                let committed = match form.index {
                    Some(index) => {
                        let id = editor.paths[index].id.clone();
                        let path = form.to_path(id);
                        editor.paths[index] = path;
                        true
                    }
                    None => {
                        editor.paths.push(form.to_path(next_id));
                        true
                    }
                };
                if committed {
                    editor.path_form = None;
                }
            }
            (KeyCode::Tab, _) => form.focus = (form.focus + 1) % PATH_FORM_FIELDS,
            (KeyCode::BackTab, _) => {
                form.focus = (form.focus + PATH_FORM_FIELDS - 1) % PATH_FORM_FIELDS;
            }
            _ => {
                form.focused_area().input(key);
            }
        }
    }

    /// Validate the editor and turn it into a save or update command.
    fn submit_editor(&mut self) -> Option<AppCommand> {
        let editor = self.editor.as_mut()?;

        let title = single_line(&editor.title);
        let description = editor.description.lines().join("\n").trim().to_string();

        if let Err(err) = validate_draft(&title, &description) {
            editor.error = Some(err.to_string());
            return None;
        }

        let category = {
            let text = single_line(&editor.category);
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        };
        let paths = editor.paths.clone();

        let command = match editor.editing_id.clone() {
            None => AppCommand::Save(PlaybookDraft {
                title,
                description,
                escalation_paths: paths,
                category,
                resources: None,
                contributor: None,
            }),
            Some(id) => AppCommand::Update(
                id,
                PlaybookPatch {
                    title: Some(title),
                    description: Some(description),
                    escalation_paths: Some(paths),
                    category,
                    resources: None,
                    contributor: None,
                },
            ),
        };

        self.editor = None;
        self.view = View::List;
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{GatewayError, LocalGateway};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_app() -> App {
        let dir = std::env::temp_dir().join(format!(
            "vetbook-tui-test-{}",
            vetbook_core::new_playbook_id()
        ));
        App::new(
            TuiConfig::default(),
            Arc::new(LocalGateway::new(dir)) as Arc<dyn PlaybookService>,
        )
    }

    #[test]
    fn test_starts_on_list_with_templates() {
        let app = test_app();
        assert_eq!(app.view, View::List);
        assert_eq!(app.playbooks.len(), 5);
        assert!(is_builtin_template(&app.playbooks[0].id));
    }

    #[test]
    fn test_set_user_playbooks_keeps_templates_first() {
        let mut app = test_app();
        let mut user = app.playbooks[0].clone();
        user.id = "user-1".to_string();
        app.set_user_playbooks(vec![user]);

        assert_eq!(app.playbooks.len(), 6);
        assert_eq!(app.playbooks[5].id, "user-1");
    }

    #[test]
    fn test_enter_opens_viewer_with_flow() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.view, View::Viewer);
        let viewer = app.viewer.as_ref().unwrap();
        assert!(viewer.flow.current_question().is_some());
    }

    #[test]
    fn test_template_edit_and_delete_are_blocked() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(app.view, View::List);
        assert!(app.editor.is_none());

        app.handle_key(key(KeyCode::Char('d')));
        assert!(app.pending_delete.is_none());
        assert_eq!(app.notifications.len(), 2);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = test_app();
        let mut user = app.playbooks[0].clone();
        user.id = "user-1".to_string();
        app.set_user_playbooks(vec![user]);
        app.selected = 5;

        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(app.pending_delete.as_deref(), Some("user-1"));

        // Any key except 'y' cancels.
        let cancelled = app.handle_key(key(KeyCode::Esc));
        assert!(cancelled.is_none());
        assert!(app.pending_delete.is_none());

        app.handle_key(key(KeyCode::Char('d')));
        let command = app.handle_key(key(KeyCode::Char('y')));
        assert!(matches!(command, Some(AppCommand::Delete(id)) if id == "user-1"));
    }

    #[test]
    fn test_editor_rejects_short_title() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.view, View::Editor);

        // Type a one-character title, then try to save.
        app.handle_key(key(KeyCode::Char('x')));
        let command = app.handle_key(ctrl('s'));
        assert!(command.is_none());
        let editor = app.editor.as_ref().unwrap();
        assert!(editor.error.as_ref().unwrap().contains("Title"));
    }

    #[test]
    fn test_editor_produces_save_command() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('n')));

        for c in "Review drafts".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "How to review AI drafts".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }

        let command = app.handle_key(ctrl('s'));
        match command {
            Some(AppCommand::Save(draft)) => {
                assert_eq!(draft.title, "Review drafts");
                assert_eq!(draft.description, "How to review AI drafts");
            }
            other => panic!("expected save command, got {other:?}"),
        }
        assert_eq!(app.view, View::List);
    }

    #[test]
    fn test_editor_path_form_commits_paths() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('n')));

        // Move focus to the paths panel and open the add form.
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('a')));
        assert!(app.editor.as_ref().unwrap().path_form.is_some());

        for c in "Verify internally".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        // Skip to the conditions field and enter two conditions.
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        for c in "First condition".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        for c in "Second condition".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }

        app.handle_key(ctrl('s'));
        let editor = app.editor.as_ref().unwrap();
        assert!(editor.path_form.is_none());
        assert_eq!(editor.paths.len(), 1);
        assert_eq!(editor.paths[0].name, "Verify internally");
        assert_eq!(
            editor.paths[0].conditions,
            vec!["First condition", "Second condition"]
        );
    }

    #[test]
    fn test_viewer_yes_answer_reaches_outcome() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('y')));

        let viewer = app.viewer.as_ref().unwrap();
        assert!(viewer.flow.outcome().is_some());

        // Reset returns to the first question.
        app.handle_key(key(KeyCode::Char('r')));
        let viewer = app.viewer.as_ref().unwrap();
        assert!(viewer.flow.outcome().is_none());
    }

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::NotFound;
        assert_eq!(err.to_string(), "Playbook not found");
    }
}
