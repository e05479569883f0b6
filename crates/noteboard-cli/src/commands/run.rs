use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::info;

use noteboard_core::list::{parse_clipboard, Todo};
use noteboard_core::scroll::Offset;
use noteboard_core::AppConfig;
use noteboard_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{apply_action, handle_key_event},
    ui,
};

pub async fn run(config: Arc<AppConfig>, file: Option<PathBuf>) -> Result<()> {
    let todos = match file {
        Some(path) => load_todos(&path)?,
        None => Vec::new(),
    };
    info!("Starting TUI with {} todos", todos.len());

    // Auto-scroll ticks arrive here from the scroller's timer task
    let (scroll_tx, mut scroll_rx) = mpsc::unbounded_channel::<Offset>();
    let mut app = App::new(config.clone(), todos, scroll_tx);
    let events = EventHandler::new(config.ui.tick_rate_ms);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        SetTitle("Noteboard")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &mut scroll_rx, &events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result?;

    // Nothing is persisted; hand the list back as markdown
    for todo in &app.todos {
        let mark = if todo.is_completed { "x" } else { " " };
        println!("{}- [{}] {}", "  ".repeat(todo.ident as usize), mark, todo.text);
    }
    Ok(())
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    scroll_rx: &mut mpsc::UnboundedReceiver<Offset>,
    events: &EventHandler,
) -> Result<()> {
    loop {
        // Drain auto-scroll ticks (non-blocking)
        while let Ok(offset) = scroll_rx.try_recv() {
            app.on_auto_scroll(offset);
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.should_quit {
            info!("Quit requested");
            return Ok(());
        }

        match events.next(app.drag.is_some())? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                apply_action(app, action);
            }
            Some(AppEvent::Mouse(mouse)) => app.handle_mouse(mouse),
            Some(AppEvent::Paste(text)) => app.handle_paste(&text),
            Some(AppEvent::Resize(..)) | Some(AppEvent::Tick) | None => {}
        }
    }
}

fn load_todos(path: &Path) -> Result<Vec<Todo>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read todos from {}", path.display()))?;
    Ok(parse_clipboard(&content)
        .into_iter()
        .map(|text| Todo::new(None, text))
        .collect())
}
