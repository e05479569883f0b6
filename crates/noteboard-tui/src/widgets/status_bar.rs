use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};
use crate::theme::Palette;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mode_str = match &app.mode {
            Mode::Normal if app.drag.is_some() => "DRAG",
            Mode::Normal => "NORMAL",
            Mode::Insert(_) => "INSERT",
            Mode::Help => "HELP",
        };

        let done = app.todos.iter().filter(|t| t.is_completed).count();

        let status_text = match (&app.mode, &app.status_message) {
            (Mode::Insert(buffer), _) => format!(" {} | new todo: {}_", mode_str, buffer),
            (Mode::Normal, _) if app.drag.is_some() => format!(
                " {} | scrolled {:+.0} rows",
                mode_str,
                app.drag.as_ref().map_or(0.0, |d| d.scrolled()) / app.config.ui.row_height_px
            ),
            (_, Some(msg)) => format!(" {} | {}", mode_str, msg),
            (_, None) => format!(" {} | {}/{} done", mode_str, done, app.todos.len()),
        };

        let help_hint = " ?:help q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(Palette::FG0).bg(Palette::BG2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(Palette::BG2)),
            Span::styled(help_hint, Style::default().fg(Palette::GREY0).bg(Palette::BG2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use noteboard_core::list::Todo;
    use noteboard_core::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    use super::*;

    fn mouse(kind: MouseEventKind, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_drag_shows_rows_actually_scrolled() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let todos = (0..30).map(|i| Todo::new(None, i.to_string())).collect();
        let mut app = App::new(Arc::new(AppConfig::default()), todos, tx);
        app.set_list_area(Rect::new(0, 1, 40, 10));

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30));
        tokio::time::sleep(Duration::from_secs(1)).await;

        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|frame| StatusBarWidget::render(frame, frame.area(), &app))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = (0..40).map(|x| buffer[(x, 0)].symbol().to_string()).collect();
        assert!(text.starts_with(" DRAG | scrolled +20 rows"), "got {:?}", text);

        app.cancel_drag();
    }
}
