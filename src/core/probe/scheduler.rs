//! Fixed-period scheduler.
//!
//! Fires `on_tick` once immediately on [`Scheduler::start`] and then every period,
//! measured from the start instant rather than from tick completion. Each tick
//! runs as its own task, so a slow probe never delays the next tick.

use std::time::Duration;

use futures::future::BoxFuture;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Running schedule: loop task plus its shutdown signal
struct ScheduleSlot {
    handle: JoinHandle<()>,
    shutdown_tx: watch::Sender<bool>,
}

/// Repeating timer with explicit, idempotent teardown
#[derive(Default)]
pub struct Scheduler {
    slot: Option<ScheduleSlot>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking; a previously running schedule is stopped first
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(&mut self, period: Duration, on_tick: F)
    where
        F: Fn() -> BoxFuture<'static, ()> + Send + Sync + 'static,
    {
        self.stop();

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let period = period.max(Duration::from_millis(1));

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // Stay aligned to start + n * period; missed ticks are dropped, not burst
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {
                        tokio::spawn(on_tick());
                    }
                }
            }
        });

        self.slot = Some(ScheduleSlot {
            handle,
            shutdown_tx,
        });
    }

    /// Stop ticking; no-op when not running
    ///
    /// In-flight ticks are not aborted.
    pub fn stop(&mut self) {
        if let Some(slot) = self.slot.take() {
            let _ = slot.shutdown_tx.send(true);
            slot.handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.slot
            .as_ref()
            .map(|slot| !slot.handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
