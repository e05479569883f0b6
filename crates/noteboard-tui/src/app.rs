use std::sync::Arc;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use parking_lot::Mutex;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use noteboard_core::list::{self, Todo};
use noteboard_core::scroll::{Offset, Position, ScrollCallback, ScrollContainer, VirtualContainer};
use noteboard_core::sortable::{DragSession, ListLayout};
use noteboard_core::AppConfig;

/// Rows scrolled per mouse wheel notch
const WHEEL_ROWS: f64 = 3.0;

/// Input mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing the text of a new todo
    Insert(String),
    Help,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub todos: Vec<Todo>,
    pub selected: usize,
    pub mode: Mode,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Scroll state of the todo list, in virtual pixels
    pub viewport: Arc<Mutex<VirtualContainer>>,
    /// Active mouse drag, if any
    pub drag: Option<DragSession<VirtualContainer>>,
    /// Where the todo list was last drawn, for mouse hit testing
    pub list_area: Rect,
    scroll_tx: mpsc::UnboundedSender<Offset>,
}

impl App {
    /// Create app state; auto-scroll ticks are reported on `scroll_tx`
    pub fn new(config: Arc<AppConfig>, todos: Vec<Todo>, scroll_tx: mpsc::UnboundedSender<Offset>) -> Self {
        Self {
            config,
            todos,
            selected: 0,
            mode: Mode::Normal,
            status_message: None,
            should_quit: false,
            viewport: Arc::new(Mutex::new(VirtualContainer::default())),
            drag: None,
            list_area: Rect::default(),
            scroll_tx,
        }
    }

    #[inline]
    fn row_height(&self) -> f64 {
        self.config.ui.row_height_px
    }

    /// Record where the list is drawn and resize the viewport to match
    pub fn set_list_area(&mut self, area: Rect) {
        self.list_area = area;
        let rh = self.row_height();
        self.viewport
            .lock()
            .set_client_size(area.width as f64 * rh, area.height as f64 * rh);
        self.sync_content();
    }

    /// Resize the scrollable content after the list changed length
    fn sync_content(&mut self) {
        let rh = self.row_height();
        let mut viewport = self.viewport.lock();
        let width = viewport.metrics().client_width;
        viewport.set_content_size(width, self.todos.len() as f64 * rh);
    }

    /// First list row visible in the viewport
    pub fn scroll_row(&self) -> usize {
        (self.viewport.lock().scroll_top() / self.row_height()).floor() as usize
    }

    /// List index under a terminal cell
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }
        let idx = self.scroll_row() + (row - area.y) as usize;
        (idx < self.todos.len()).then_some(idx)
    }

    /// Terminal cell to viewport pixels; cells outside the list give
    /// coordinates outside the viewport
    fn pointer(&self, column: u16, row: u16) -> Position {
        let rh = self.row_height();
        Position::new(
            (column as f64 - self.list_area.x as f64) * rh,
            (row as f64 - self.list_area.y as f64) * rh,
        )
    }

    /// Order in which rows are drawn; while dragging, the dragged row is
    /// shown where it would land
    pub fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.todos.len()).collect();
        if let Some(drag) = &self.drag {
            list::move_to(&mut order, drag.from(), drag.target_index());
        }
        order
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        // A release always ends the drag, whatever the mode
        if mouse.kind == MouseEventKind::Up(MouseButton::Left) {
            let pointer = self.pointer(mouse.column, mouse.row);
            self.finish_drag(pointer);
            return;
        }
        if self.mode != Mode::Normal {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(idx) = self.row_at(mouse.column, mouse.row) {
                    self.selected = idx;
                    self.start_drag(idx, self.pointer(mouse.column, mouse.row));
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let pointer = self.pointer(mouse.column, mouse.row);
                if let Some(drag) = self.drag.as_mut() {
                    drag.move_to(pointer);
                }
            }
            MouseEventKind::ScrollDown if self.drag.is_none() => {
                let delta = WHEEL_ROWS * self.row_height();
                self.viewport.lock().scroll_by(Offset::new(0.0, delta));
            }
            MouseEventKind::ScrollUp if self.drag.is_none() => {
                let delta = WHEEL_ROWS * self.row_height();
                self.viewport.lock().scroll_by(Offset::new(0.0, -delta));
            }
            _ => {}
        }
    }

    fn start_drag(&mut self, idx: usize, pointer: Position) {
        let tx = self.scroll_tx.clone();
        let on_scroll: ScrollCallback = Arc::new(move |offset| {
            if tx.send(offset).is_err() {
                warn!("Failed to report auto-scroll tick: receiver dropped");
            }
        });
        let layout = ListLayout {
            row_count: self.todos.len(),
            row_width: self.list_area.width.max(1) as f64 * self.row_height(),
            row_height: self.row_height(),
        };

        match DragSession::start(
            Arc::clone(&self.viewport),
            layout,
            idx,
            pointer,
            &self.config.autoscroll,
            on_scroll,
        ) {
            Ok(session) => self.drag = Some(session),
            Err(e) => {
                warn!("Could not start drag: {}", e);
                self.status_message = Some(format!("Drag failed: {}", e));
            }
        }
    }

    fn finish_drag(&mut self, pointer: Position) {
        let Some(mut drag) = self.drag.take() else {
            return;
        };
        drag.move_to(pointer);
        let (from, to) = drag.finish();
        if from != to && list::move_to(&mut self.todos, from, to) {
            info!("Moved todo {} -> {}", from, to);
            self.status_message = Some(format!("Moved to position {}", to + 1));
        }
        self.selected = to;
    }

    /// Abort the active drag, leaving the list as it was
    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            drag.cancel();
            self.status_message = Some("Drag cancelled".to_string());
        }
    }

    /// An auto-scroll tick happened; the caller redraws
    pub fn on_auto_scroll(&mut self, offset: Offset) {
        trace!("Auto-scrolled by {:.2},{:.2}", offset.left, offset.top);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.todos.len() {
            self.selected += 1;
        }
        self.ensure_selected_visible();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.ensure_selected_visible();
    }

    /// Scroll just enough for the selected row to be fully visible
    pub fn ensure_selected_visible(&mut self) {
        let rh = self.row_height();
        let top = self.selected as f64 * rh;
        let mut viewport = self.viewport.lock();
        let metrics = viewport.metrics();
        if top < metrics.scroll_top {
            viewport.scroll_to(top, metrics.scroll_left);
        } else if top + rh > metrics.scroll_top + metrics.client_height {
            viewport.scroll_to(top + rh - metrics.client_height, metrics.scroll_left);
        }
    }

    /// Move the selected todo up (negative) or down
    pub fn move_selected(&mut self, by: isize) {
        let Some(id) = self.todos.get(self.selected).map(|t| t.id.clone()) else {
            return;
        };
        if list::move_by(&mut self.todos, &id, by) {
            self.selected = self.selected.saturating_add_signed(by);
            self.ensure_selected_visible();
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(todo) = self.todos.get_mut(self.selected) {
            todo.toggle();
        }
    }

    pub fn delete_selected(&mut self) {
        if self.selected < self.todos.len() {
            let removed = self.todos.remove(self.selected);
            debug!("Deleted todo {}", removed.id);
            if self.selected >= self.todos.len() {
                self.selected = self.todos.len().saturating_sub(1);
            }
            self.sync_content();
        }
    }

    pub fn begin_insert(&mut self) {
        self.mode = Mode::Insert(String::new());
    }

    /// Add the typed todo right after the selected one
    pub fn commit_insert(&mut self) {
        let Mode::Insert(text) = std::mem::replace(&mut self.mode, Mode::Normal) else {
            return;
        };
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let after = self.todos.get(self.selected);
        let todo = Todo::new(after, text);
        let after_id = after.map(|t| t.id.clone());
        list::insert_after(&mut self.todos, after_id.as_deref(), todo);
        if after_id.is_some() {
            self.selected += 1;
        }
        self.sync_content();
        self.ensure_selected_visible();
    }

    /// Bracketed paste: split into todos in normal mode, inline in insert mode
    pub fn handle_paste(&mut self, text: &str) {
        self.cancel_drag();
        if let Mode::Insert(buffer) = &mut self.mode {
            buffer.push_str(&text.replace(['\r', '\n'], " "));
            return;
        }
        if self.mode != Mode::Normal {
            return;
        }

        if self.todos.is_empty() {
            self.todos.push(Todo::new(None, ""));
            self.selected = 0;
        }
        let id = self.todos[self.selected].id.clone();
        let before = self.todos.len();

        let result = list::paste(
            &mut self.todos,
            &id,
            text,
            |todo, line| todo.text = line.to_string(),
            |after, line| Todo::new(Some(after), line),
        );
        match result {
            Ok(()) => {
                let added = self.todos.len() - before;
                self.status_message = Some(format!("Pasted {} new item(s)", added));
            }
            Err(e) => {
                warn!("Paste failed: {}", e);
                self.status_message = Some(format!("Paste failed: {}", e));
            }
        }
        self.sync_content();
    }
}
