//! Drag-and-drop reordering for a vertical list of fixed-height rows
//!
//! A [`DragSession`] tracks one gesture: where the row was picked up, how far
//! the pointer has moved, and how far the container has auto-scrolled
//! underneath it. On release it reports the `(from, to)` indices; the caller
//! applies them with [`crate::list::move_to`].

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::config::AutoScrollConfig;
use crate::scroll::{AutoScroller, Position, ScrollCallback, ScrollContainer, ScrollerConfig};
use crate::{Error, Result};

/// Rows of a list laid out top to bottom inside a scroll container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListLayout {
    pub row_count: usize,
    pub row_width: f64,
    pub row_height: f64,
}

pub struct DragSession<C> {
    from: usize,
    layout: ListLayout,
    /// Pointer position when the row was picked up, in viewport coordinates
    origin: Position,
    /// Row top in content coordinates at pick-up
    start_top: f64,
    start_scroll_top: f64,
    bounds: (Position, Position),
    translate: Position,
    container: Arc<Mutex<C>>,
    scroller: Option<AutoScroller<C>>,
}

impl<C> DragSession<C>
where
    C: ScrollContainer + Send + 'static,
{
    /// Pick up row `from` at `pointer`
    ///
    /// The row may travel anywhere inside the visible part of the container.
    /// Auto-scroll is skipped entirely when `settings.enabled` is false.
    pub fn start(
        container: Arc<Mutex<C>>,
        layout: ListLayout,
        from: usize,
        pointer: Position,
        settings: &AutoScrollConfig,
        on_scroll: ScrollCallback,
    ) -> Result<Self> {
        if from >= layout.row_count {
            return Err(Error::ItemNotFound(format!(
                "row {} of {}",
                from, layout.row_count
            )));
        }

        let metrics = container.lock().metrics();
        let start_top = from as f64 * layout.row_height;
        let viewport_top = start_top - metrics.scroll_top;
        let min_translate = Position::new(0.0, -viewport_top);
        let max_translate = Position::new(0.0, metrics.client_height - layout.row_height - viewport_top);
        let geometry = ScrollerConfig::new(layout.row_width, layout.row_height, min_translate, max_translate)?;

        let scroller = if settings.enabled {
            Some(AutoScroller::new(
                Arc::clone(&container),
                on_scroll,
                geometry,
                settings.clone(),
            )?)
        } else {
            None
        };

        debug!(
            "Drag started on row {} (translate bounds {:.1}..={:.1})",
            from, min_translate.y, max_translate.y
        );

        Ok(Self {
            from,
            layout,
            origin: pointer,
            start_top,
            start_scroll_top: metrics.scroll_top,
            bounds: (min_translate, max_translate),
            translate: Position::ZERO,
            container,
            scroller,
        })
    }

    /// Index of the row being dragged
    #[inline]
    pub fn from(&self) -> usize {
        self.from
    }

    /// Current translation of the dragged row relative to where it was picked up
    #[inline]
    pub fn translate(&self) -> Position {
        self.translate
    }

    /// Check if the container is auto-scrolling right now
    pub fn is_auto_scrolling(&self) -> bool {
        self.scroller.as_ref().is_some_and(|s| s.is_scrolling())
    }

    /// Pointer moved
    pub fn move_to(&mut self, pointer: Position) {
        let (min, max) = self.bounds;
        self.translate = Position::new(pointer.x - self.origin.x, pointer.y - self.origin.y).clamp(min, max);

        if let Some(scroller) = self.scroller.as_mut() {
            scroller.update(self.translate);
        }
    }

    /// Pixels the container actually scrolled since pick-up (negative = up)
    pub fn scrolled(&self) -> f64 {
        self.container.lock().metrics().scroll_top - self.start_scroll_top
    }

    /// Row the dragged item would land on if released now
    pub fn target_index(&self) -> usize {
        let center = self.start_top + self.translate.y + self.scrolled() + self.layout.row_height / 2.0;
        let row = (center / self.layout.row_height).floor().max(0.0) as usize;
        row.min(self.layout.row_count.saturating_sub(1))
    }

    /// Release the row; returns `(from, to)`
    pub fn finish(mut self) -> (usize, usize) {
        self.halt();
        let to = self.target_index();
        debug!("Drag finished: row {} -> {}", self.from, to);
        (self.from, to)
    }

    /// Abort the drag without reordering
    pub fn cancel(mut self) {
        self.halt();
        debug!("Drag cancelled on row {}", self.from);
    }

    fn halt(&mut self) {
        if let Some(scroller) = self.scroller.as_mut() {
            scroller.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::scroll::VirtualContainer;

    /// 50 rows of 20px in a 200px viewport, scrolled so row 5 is at the top
    fn setup(enabled: bool) -> (Arc<Mutex<VirtualContainer>>, DragSession<VirtualContainer>) {
        let container = Arc::new(Mutex::new(
            VirtualContainer::new(100.0, 1000.0, 100.0, 200.0).with_scroll(100.0, 0.0),
        ));
        let layout = ListLayout {
            row_count: 50,
            row_width: 100.0,
            row_height: 20.0,
        };
        let settings = AutoScrollConfig {
            enabled,
            ..Default::default()
        };
        let session = DragSession::start(
            Arc::clone(&container),
            layout,
            10,
            Position::new(50.0, 110.0),
            &settings,
            Arc::new(|_| {}),
        )
        .unwrap();
        (container, session)
    }

    #[tokio::test(start_paused = true)]
    async fn test_drag_within_viewport_does_not_scroll() {
        let (container, mut session) = setup(true);

        session.move_to(Position::new(50.0, 130.0));
        assert_eq!(session.translate(), Position::new(0.0, 20.0));
        assert!(!session.is_auto_scrolling());
        assert_eq!(session.target_index(), 11);

        let (from, to) = session.finish();
        assert_eq!((from, to), (10, 11));
        assert_eq!(container.lock().scroll_top(), 100.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drag_to_bottom_edge_scrolls_and_counts_scrolled_rows() {
        let (container, mut session) = setup(true);

        // Far past the bottom: clamped to the last visible slot
        session.move_to(Position::new(50.0, 600.0));
        assert_eq!(session.translate(), Position::new(0.0, 80.0));
        assert!(session.is_auto_scrolling());

        tokio::time::sleep(Duration::from_millis(11)).await;
        assert_eq!(container.lock().scroll_top(), 110.0);
        assert_eq!(session.scrolled(), 10.0);

        let (from, to) = session.finish();
        assert_eq!(from, 10);
        // 200 + 80 + 10 scrolled + 10 half row = 300 -> row 15
        assert_eq!(to, 15);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(container.lock().scroll_top(), 110.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drag_to_top_edge_scrolls_up() {
        let (container, mut session) = setup(true);

        session.move_to(Position::new(50.0, -500.0));
        assert_eq!(session.translate(), Position::new(0.0, -100.0));
        assert!(session.is_auto_scrolling());

        tokio::time::sleep(Duration::from_millis(11)).await;
        assert_eq!(container.lock().scroll_top(), 90.0);
        assert_eq!(session.scrolled(), -10.0);
        assert_eq!(session.target_index(), 5);

        session.cancel();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(container.lock().scroll_top(), 90.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scrolled_stops_growing_once_clamped() {
        let (container, mut session) = setup(true);

        session.move_to(Position::new(50.0, 600.0));
        tokio::time::sleep(Duration::from_secs(2)).await;

        // The timer keeps firing at the bottom; only the real movement counts
        assert_eq!(container.lock().scroll_top(), 800.0);
        assert_eq!(session.scrolled(), 700.0);
        // 200 + 80 + 700 + 10 = 990 -> row 49, the last one
        assert_eq!(session.finish(), (10, 49));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_autoscroll() {
        let (container, mut session) = setup(false);

        session.move_to(Position::new(50.0, 600.0));
        assert!(!session.is_auto_scrolling());
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(container.lock().scroll_top(), 100.0);
        assert_eq!(session.finish(), (10, 14));
    }

    #[tokio::test]
    async fn test_start_rejects_unknown_row() {
        let container = Arc::new(Mutex::new(VirtualContainer::new(100.0, 100.0, 100.0, 100.0)));
        let layout = ListLayout {
            row_count: 2,
            row_width: 100.0,
            row_height: 20.0,
        };
        let result = DragSession::start(
            container,
            layout,
            2,
            Position::ZERO,
            &AutoScrollConfig::default(),
            Arc::new(|_| {}),
        );
        assert!(matches!(result, Err(Error::ItemNotFound(_))));
    }
}
