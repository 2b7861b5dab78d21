use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};

/// Clock that decides when the next tick fires.
pub trait TickSource {
    fn tick(&mut self) -> impl Future<Output = ()>;

    /// Called when ticking resumes after a pause or a finished game, so the
    /// next tick is a full period away.
    fn reset(&mut self);
}

pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

impl TickSource for IntervalTicker {
    async fn tick(&mut self) {
        self.interval.tick().await;
    }

    fn reset(&mut self) {
        self.interval.reset();
    }
}

/// Ticks only when its handle says so. Once every handle is dropped it never
/// ticks again.
pub struct ManualTicker {
    rx: mpsc::UnboundedReceiver<()>,
}

#[derive(Clone)]
pub struct ManualTickHandle {
    tx: mpsc::UnboundedSender<()>,
}

impl ManualTicker {
    pub fn channel() -> (Self, ManualTickHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, ManualTickHandle { tx })
    }
}

impl ManualTickHandle {
    pub fn step(&self) {
        let _ = self.tx.send(());
    }
}

impl TickSource for ManualTicker {
    async fn tick(&mut self) {
        if self.rx.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    }

    /// Drops ticks queued while the session was not running.
    fn reset(&mut self) {
        while self.rx.try_recv().is_ok() {}
    }
}
