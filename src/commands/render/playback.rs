//! Paced playback with Ctrl-C interruption

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use algotrace_core::error::{Result, TraceError};

/// Longest single sleep, so an interrupt is noticed promptly
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct Playback {
    delay: Duration,
    interrupted: Arc<AtomicBool>,
}

impl Playback {
    /// A zero delay never sleeps and installs no signal handler
    pub fn new(delay: Duration) -> Self {
        let interrupted = Arc::new(AtomicBool::new(false));

        if !delay.is_zero() {
            let interrupted_clone = Arc::clone(&interrupted);
            let _ = ctrlc::set_handler(move || {
                interrupted_clone.store(true, Ordering::SeqCst);
            });
        }

        Self { delay, interrupted }
    }

    /// Wait one step's delay; fails with `Interrupted` once Ctrl-C was pressed
    pub fn pause(&self) -> Result<()> {
        if self.delay.is_zero() {
            return Ok(());
        }

        let deadline = Instant::now() + self.delay;
        loop {
            if self.interrupted.load(Ordering::SeqCst) {
                tracing::debug!("playback interrupted");
                return Err(TraceError::Interrupted);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            thread::sleep((deadline - now).min(POLL_INTERVAL));
        }
    }

    #[cfg(test)]
    fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }
}
