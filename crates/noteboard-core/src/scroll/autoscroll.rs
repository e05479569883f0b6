//! L3 Molecular Layer: Timer-driven auto-scroll controller
//!
//! Combines edge detection with a repeating tokio timer that nudges a
//! container while a dragged item sits near one of its edges.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use super::config::{AutoScrollConfig, AutoScrollConfigExt};
use super::container::ScrollContainer;
use super::edge::{plan, ScrollPlan, ScrollerConfig};
use super::geometry::{Offset, Position};
use crate::{Error, Result};

/// Callback receiving the offset applied on every tick
///
/// It runs on the timer task while the container lock is held, so it must
/// not lock the same container.
pub type ScrollCallback = Arc<dyn Fn(Offset) + Send + Sync>;

/// Drives a container towards the edge a dragged item is pressed against
///
/// Call [`update`](Self::update) on every pointer move and
/// [`stop`](Self::stop) when the drag ends. Every `update` cancels the running
/// timer and, if the item is still near an edge, starts a fresh one with the
/// recomputed direction and speed. There is never more than one timer per
/// instance, and no tick of a cancelled timer touches the container once
/// `stop` or `update` has returned.
pub struct AutoScroller<C> {
    container: Arc<Mutex<C>>,
    on_scroll: ScrollCallback,
    geometry: ScrollerConfig,
    settings: AutoScrollConfig,
    /// Bumped on every stop; ticks from older timers see a stale value and bail
    generation: Arc<AtomicU64>,
    timer: Option<JoinHandle<()>>,
    active: Option<ScrollPlan>,
    runtime: Handle,
}

impl<C> AutoScroller<C>
where
    C: ScrollContainer + Send + 'static,
{
    /// Create a scroller bound to `container`
    ///
    /// Must be called from within a tokio runtime; the timer runs on it.
    pub fn new(
        container: Arc<Mutex<C>>,
        on_scroll: ScrollCallback,
        geometry: ScrollerConfig,
        settings: AutoScrollConfig,
    ) -> Result<Self> {
        settings.validate()?;
        let runtime = Handle::try_current().map_err(|e| Error::Runtime(e.to_string()))?;

        Ok(Self {
            container,
            on_scroll,
            geometry,
            settings,
            generation: Arc::new(AtomicU64::new(0)),
            timer: None,
            active: None,
            runtime,
        })
    }

    /// Geometry the scroller was built with
    pub fn geometry(&self) -> &ScrollerConfig {
        &self.geometry
    }

    /// Check if a timer is currently running
    #[inline]
    pub fn is_scrolling(&self) -> bool {
        self.timer.is_some()
    }

    /// Direction and speed of the running timer, if any
    #[inline]
    pub fn active_plan(&self) -> Option<ScrollPlan> {
        self.active
    }

    /// React to a new translated position of the dragged item
    pub fn update(&mut self, translate: Position) {
        let metrics = self.container.lock().metrics();
        let next = plan(translate, &metrics, &self.geometry, self.settings.acceleration);

        self.stop();

        if let Some(next) = next {
            debug!(
                "Auto-scroll towards {:?} at {:.2}px/tick (translate {:.1},{:.1})",
                next.edge, next.speed, translate.x, translate.y
            );
            self.start(next);
        }
    }

    /// Cancel the running timer, if any
    pub fn stop(&mut self) {
        // Holding the container lock while bumping the generation waits out a
        // tick that is mid-flight and invalidates every later one.
        {
            let _container = self.container.lock();
            self.generation.fetch_add(1, Ordering::AcqRel);
        }

        if let Some(timer) = self.timer.take() {
            timer.abort();
            debug!("Auto-scroll stopped");
        }
        self.active = None;
    }

    fn start(&mut self, next: ScrollPlan) {
        let generation = self.generation.load(Ordering::Acquire);
        let shared_generation = Arc::clone(&self.generation);
        let container = Arc::clone(&self.container);
        let on_scroll = Arc::clone(&self.on_scroll);
        let period = self.settings.tick_duration();
        let offset = next.offset();

        let timer = self.runtime.spawn(async move {
            // First tick one period from now, like a browser interval
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let mut container = container.lock();
                if shared_generation.load(Ordering::Acquire) != generation {
                    break;
                }
                container.scroll_by(offset);
                on_scroll(offset);
            }
        });

        self.timer = Some(timer);
        self.active = Some(next);
    }
}

impl<C> Drop for AutoScroller<C> {
    fn drop(&mut self) {
        // Same ordering as `stop`: wait out an in-flight tick, then invalidate
        {
            let _container = self.container.lock();
            self.generation.fetch_add(1, Ordering::AcqRel);
        }
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
