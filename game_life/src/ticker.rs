// ticker.rs - Periodic tick driver running on the tokio runtime
//
// The ticker never touches the simulation. It only queues tick messages
// and wakes the UI thread, which applies them to the controller.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

pub struct Ticker {
    handle: Handle,
    period: Duration,
    task: Option<JoinHandle<()>>,
    ticks: Option<UnboundedReceiver<()>>,
}

impl Ticker {
    pub fn new(handle: Handle, period: Duration) -> Self {
        Self {
            handle,
            period,
            task: None,
            ticks: None,
        }
    }

    /// Starts firing once per period, the first tick one period from now.
    /// `wake` runs after every tick. Does nothing if already started.
    pub fn start<F>(&mut self, wake: F)
    where
        F: Fn() + Send + 'static,
    {
        if self.task.is_some() {
            return;
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let period = self.period;
        self.task = Some(self.handle.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break; // receiver dropped by stop()
                }
                wake();
            }
        }));
        self.ticks = Some(rx);
        log::debug!("ticker started ({} ms)", period.as_millis());
    }

    /// Stops the task and discards ticks that were not drained yet.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::debug!("ticker stopped");
        }
        self.ticks = None;
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    /// Number of ticks received since the last drain.
    pub fn drain(&mut self) -> usize {
        let Some(ticks) = self.ticks.as_mut() else {
            return 0;
        };
        let mut pending = 0;
        while ticks.try_recv().is_ok() {
            pending += 1;
        }
        pending
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
