use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Palette;

/// Titled block: an `emoji title` header row with the content below it
pub struct SectionWidget;

impl SectionWidget {
    /// Draw the header and return the area left for the content
    pub fn render(frame: &mut Frame, area: Rect, emoji: &str, title: &str) -> Rect {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let header = Line::from(vec![
            Span::raw(format!("{} ", emoji)),
            Span::styled(
                title.to_string(),
                Style::default()
                    .fg(Palette::YELLOW)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(header).style(Style::default().bg(Palette::BG0)),
            chunks[0],
        );

        chunks[1]
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    #[test]
    fn test_header_and_content_area() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        let mut content = Rect::default();
        terminal
            .draw(|frame| {
                content = SectionWidget::render(frame, frame.area(), "*", "Todos");
            })
            .unwrap();

        assert_eq!(content, Rect::new(0, 1, 20, 4));
        let buffer = terminal.backend().buffer();
        let header: String = (0..7).map(|x| buffer[(x, 0)].symbol().to_string()).collect();
        assert_eq!(header, "* Todos");
    }
}
