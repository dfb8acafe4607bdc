//! VETBOOK TUI entry point.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use vetbook_tui::config::TuiConfig;
use vetbook_tui::gateway::{FallbackGateway, LocalGateway, PlaybookService, RestGateway};
use vetbook_tui::notifications::NotificationLevel;
use vetbook_tui::state::{App, AppCommand};
use vetbook_tui::views;

enum TuiEvent {
    Key(KeyEvent),
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = TuiConfig::load()?;
    let gateway: Arc<dyn PlaybookService> = Arc::new(FallbackGateway::new(
        RestGateway::new(&config)?,
        LocalGateway::new(config.fallback_dir.clone()),
    ));
    let mut app = App::new(config, gateway);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx);

    // Initial load; a dead backend just means templates-only plus a banner.
    run_command(&mut app, AppCommand::Refresh).await;

    let mut ticker = tokio::time::interval(Duration::from_millis(250));

    loop {
        terminal.draw(|frame| views::render(frame, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }
            Some(event) = event_rx.recv() => {
                let TuiEvent::Key(key) = event;
                if let Some(command) = app.handle_key(key) {
                    run_command(&mut app, command).await;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

async fn run_command(app: &mut App, command: AppCommand) {
    let gateway = app.gateway.clone();
    match command {
        AppCommand::Refresh => refresh(app).await,
        AppCommand::Delete(id) => match gateway.delete_playbook(&id).await {
            Ok(()) => {
                app.notify(NotificationLevel::Success, "Playbook deleted");
                refresh(app).await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "delete failed");
                app.notify(NotificationLevel::Error, "Failed to delete playbook");
            }
        },
        AppCommand::Save(draft) => match gateway.save_playbook(draft).await {
            Ok(saved) => {
                app.notify(
                    NotificationLevel::Success,
                    format!("Saved \"{}\"", saved.title),
                );
                refresh(app).await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "save failed");
                app.notify(NotificationLevel::Error, "Failed to save playbook");
            }
        },
        AppCommand::Update(id, patch) => match gateway.update_playbook(&id, patch).await {
            Ok(updated) => {
                app.notify(
                    NotificationLevel::Success,
                    format!("Updated \"{}\"", updated.title),
                );
                refresh(app).await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "update failed");
                app.notify(NotificationLevel::Error, "Failed to update playbook");
            }
        },
    }
}

async fn refresh(app: &mut App) {
    match app.gateway.clone().list_playbooks().await {
        Ok(user) => app.set_user_playbooks(user),
        Err(err) => {
            tracing::warn!(error = %err, "refresh failed");
            app.notify(
                NotificationLevel::Warning,
                "Using templates only (storage unavailable)",
            );
        }
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(tx: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                if tx.blocking_send(TuiEvent::Key(key)).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });
}
