use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Mode};
use crate::widgets::{HelpWidget, SectionWidget, StatusBarWidget, TodoListWidget};

/// Draw one frame
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let content = SectionWidget::render(frame, chunks[0], "📝", "Todos");
    app.set_list_area(content);
    TodoListWidget::render(frame, content, app);
    StatusBarWidget::render(frame, chunks[1], app);

    if app.mode == Mode::Help {
        HelpWidget::render(frame, area);
    }
}
