// Playback clock - owned, cancellable periodic tick source
// The worker thread only produces ticks; it never touches sequencer state

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Granularity of the cancellation check in the worker loop
const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Periodic tick source backing sequencer playback
///
/// Ticks are queued on a channel and drained by the owner from its own
/// thread, keeping all sequence mutation single-writer. `cancel` stops
/// the worker and joins it; once it returns, no further tick is
/// observable. Dropping the clock cancels it, so teardown needs no
/// extra call.
#[derive(Debug)]
pub struct PlaybackClock {
    running: Arc<AtomicBool>,
    ticks: Receiver<()>,
    worker: Option<JoinHandle<()>>,
}

impl PlaybackClock {
    /// Start a clock firing every `period`
    pub fn start(period: Duration) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let (sender, receiver) = channel();

        let flag = Arc::clone(&running);
        let worker = thread::spawn(move || Self::run(flag, sender, period));

        Self {
            running,
            ticks: receiver,
            worker: Some(worker),
        }
    }

    fn run(running: Arc<AtomicBool>, sender: Sender<()>, period: Duration) {
        let mut last_tick = Instant::now();
        while running.load(Ordering::Relaxed) {
            if last_tick.elapsed() >= period {
                if sender.send(()).is_err() {
                    break;
                }
                last_tick = Instant::now();
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    /// Drain and count the ticks fired since the last call
    pub fn pending_ticks(&self) -> usize {
        self.ticks.try_iter().count()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Stop the worker and wait for it to finish
    ///
    /// Idempotent; after it returns no tick can fire.
    pub fn cancel(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for PlaybackClock {
    fn drop(&mut self) {
        self.cancel();
    }
}
