use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::theme::Palette;

pub struct TodoListWidget;

impl TodoListWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let order = app.display_order();
        let dragged = app.drag.as_ref().map(|d| d.from());
        let first = app.scroll_row();

        let lines: Vec<Line> = order
            .iter()
            .skip(first)
            .take(area.height as usize)
            .map(|&idx| {
                let todo = &app.todos[idx];
                let marker = if todo.is_completed { "[x] " } else { "[ ] " };
                let indent = "  ".repeat(todo.ident as usize);

                let mut style = if todo.is_completed {
                    Style::default()
                        .fg(Palette::DONE)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(Palette::FG0)
                };
                if dragged == Some(idx) {
                    style = style.fg(Palette::DRAGGING).add_modifier(Modifier::BOLD);
                } else if dragged.is_none() && idx == app.selected {
                    style = style.bg(Palette::SELECTION);
                }

                let prefix_width = indent.len() + marker.len();
                let text = truncate(&todo.text, (area.width as usize).saturating_sub(prefix_width));

                Line::from(vec![
                    Span::raw(indent),
                    Span::styled(marker, Style::default().fg(Palette::GREEN)),
                    Span::styled(text, style),
                ])
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(Palette::BG0)),
            area,
        );
    }
}

/// Cut `text` to at most `max_width` terminal columns, marking the cut with '…'
fn truncate(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            out.pop();
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}
