use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::{info, warn};

use noteboard_core::scroll::{AutoScroller, Offset, Position, ScrollerConfig, VirtualContainer};
use noteboard_core::AppConfig;

/// Width shared by the virtual container and the dragged item
const WIDTH: f64 = 300.0;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Vertical translation of the dragged item
    #[arg(long, default_value_t = 470.0, allow_hyphen_values = true)]
    pub y: f64,
    /// Horizontal translation of the dragged item
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub x: f64,
    /// Initial scroll position of the container
    #[arg(long, default_value_t = 0.0)]
    pub scroll_top: f64,
    /// Total height of the scrollable content
    #[arg(long, default_value_t = 1000.0)]
    pub content_height: f64,
    /// Visible height of the container
    #[arg(long, default_value_t = 500.0)]
    pub viewport_height: f64,
    /// Height of the dragged item
    #[arg(long, default_value_t = 40.0)]
    pub height: f64,
    /// Largest vertical translation the item may reach
    #[arg(long, default_value_t = 480.0)]
    pub max_y: f64,
    /// Approximate number of timer ticks to wait for; the wait is wall-clock
    /// time, so a loaded machine may see fewer
    #[arg(long, default_value_t = 10)]
    pub ticks: u32,
}

pub async fn run(config: &AppConfig, args: SimulateArgs) -> Result<()> {
    let container = Arc::new(Mutex::new(
        VirtualContainer::new(WIDTH, args.content_height, WIDTH, args.viewport_height)
            .with_scroll(args.scroll_top, 0.0),
    ));
    let geometry = ScrollerConfig::new(WIDTH, args.height, Position::ZERO, Position::new(0.0, args.max_y))?;

    let (tx, mut rx) = mpsc::unbounded_channel::<Offset>();
    let mut scroller = AutoScroller::new(
        Arc::clone(&container),
        Arc::new(move |offset| {
            if tx.send(offset).is_err() {
                warn!("Failed to report auto-scroll tick: receiver dropped");
            }
        }),
        geometry,
        config.autoscroll.clone(),
    )?;

    scroller.update(Position::new(args.x, args.y));
    match scroller.active_plan() {
        Some(plan) => info!("Scrolling towards {:?} at {:.2}px per tick", plan.edge, plan.speed),
        None => info!("Item is not near a scrollable edge"),
    }

    // Wait out the requested ticks plus half a period so the last one lands
    let interval = Duration::from_millis(config.autoscroll.interval_ms);
    tokio::time::sleep(interval * args.ticks + interval / 2).await;
    scroller.stop();

    let mut count = 0;
    while let Ok(offset) = rx.try_recv() {
        count += 1;
        println!("tick {:>3}: left {:+.2} top {:+.2}", count, offset.left, offset.top);
    }

    let final_top = container.lock().scroll_top();
    println!("{} ticks, scroll_top {:.2} -> {:.2}", count, args.scroll_top, final_top);
    Ok(())
}
