//! Background autoplay ticker
//!
//! One ticker thread exists per autoplay activation. The thread sleeps in
//! short slices toward each interval deadline so a cancellation flag is
//! observed promptly, and it never joins back into the controller; the
//! controller guards against late ticks with a generation token instead.
//! The tick callback returns false to terminate the thread, which is how
//! a dropped controller or a superseded ticker winds itself down.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Granularity at which the ticker re-checks its cancel flag
const POLL_SLICE: Duration = Duration::from_millis(10);

/// Handle to a running ticker thread
///
/// Dropping the handle cancels the thread. The thread is detached rather
/// than joined; correctness never depends on the exact moment it exits,
/// only on its ticks being ignored once the handle is cancelled.
#[derive(Debug)]
pub(crate) struct Ticker {
    cancel: Arc<AtomicBool>,
}

impl Ticker {
    /// Spawns a ticker that invokes `on_tick` once per `interval`
    ///
    /// The first tick fires a full interval after the spawn; there is no
    /// immediate initial tick. `on_tick` returns whether the ticker should
    /// keep running.
    pub(crate) fn spawn<F>(interval: Duration, on_tick: F) -> Self
    where
        F: Fn() -> bool + Send + 'static,
    {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);

        thread::spawn(move || {
            run(&flag, interval, on_tick);
        });

        Self { cancel }
    }

    /// Signals the thread to exit before its next tick
    pub(crate) fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn run<F>(cancel: &AtomicBool, interval: Duration, on_tick: F)
where
    F: Fn() -> bool,
{
    log::trace!("ticker started, interval {interval:?}");

    loop {
        let deadline = Instant::now() + interval;

        loop {
            if cancel.load(Ordering::Relaxed) {
                log::trace!("ticker cancelled");
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep(POLL_SLICE.min(deadline - now));
        }

        if cancel.load(Ordering::Relaxed) {
            log::trace!("ticker cancelled");
            return;
        }

        if !on_tick() {
            log::trace!("ticker stopped by callback");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn ticks_repeatedly_until_cancelled() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let ticker = Ticker::spawn(Duration::from_millis(25), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        thread::sleep(Duration::from_millis(110));
        ticker.cancel();
        let at_cancel = count.load(Ordering::SeqCst);
        assert!(at_cancel >= 2, "expected at least two ticks, got {at_cancel}");

        // No further ticks land once cancelled
        thread::sleep(Duration::from_millis(80));
        assert_eq!(count.load(Ordering::SeqCst), at_cancel);
    }

    #[test]
    fn callback_false_stops_the_ticker() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let _ticker = Ticker::spawn(Duration::from_millis(20), move || {
            counter.fetch_add(1, Ordering::SeqCst) == 0
        });

        thread::sleep(Duration::from_millis(120));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn drop_cancels_the_thread() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let ticker = Ticker::spawn(Duration::from_millis(20), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        drop(ticker);

        thread::sleep(Duration::from_millis(80));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn no_tick_before_the_first_interval_elapses() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let ticker = Ticker::spawn(Duration::from_millis(200), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        thread::sleep(Duration::from_millis(60));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        ticker.cancel();
    }
}
