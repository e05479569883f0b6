use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Palette;

const HELP_LINES: &[&str] = &[
    " j/k      move selection",
    " J/K      move todo down/up",
    " space/x  toggle done",
    " o        new todo",
    " d        delete todo",
    " drag     reorder with the mouse",
    " paste    split lines into todos",
    " q        quit",
];

pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, area: Rect) {
        let width = 38.min(area.width);
        let height = (HELP_LINES.len() as u16 + 2).min(area.height);
        let popup = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Palette::ACCENT))
            .style(Style::default().bg(Palette::BG0).fg(Palette::FG0));
        let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::raw(*l)).collect();

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}
