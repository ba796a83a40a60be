//! Process-level interrupts (SIGINT) turned into a cancellable wait.
//!
//! The handler only forwards a unit message over a channel; the loop notices
//! it at its next wait and unwinds normally, so the shutdown text still
//! prints and raw mode is still restored.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crate::ticker::{Wait, WaitOutcome};

/// Install the Ctrl+C / SIGINT handler. Can only be done once per process.
pub fn install() -> Result<Receiver<()>, String> {
    let (tx, rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })
    .map_err(|e| format!("failed to install interrupt handler: {}", e))?;
    Ok(rx)
}

/// Non-blocking check for a pending interrupt.
pub fn pending(rx: &Receiver<()>) -> bool {
    matches!(rx.try_recv(), Ok(()))
}

/// Waits on the interrupt channel until the deadline passes.
pub struct ChannelWait {
    rx: Receiver<()>,
}

impl ChannelWait {
    pub fn new(rx: Receiver<()>) -> Self {
        Self { rx }
    }
}

impl Wait for ChannelWait {
    fn wait(&mut self, duration: Duration) -> Result<WaitOutcome, String> {
        let Some(deadline) = Instant::now().checked_add(duration) else {
            // Too far out to represent; only an interrupt ends this wait.
            return match self.rx.recv() {
                Ok(()) => Ok(WaitOutcome::Cancelled),
                Err(_) => Err("interrupt channel closed".to_string()),
            };
        };

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(WaitOutcome::Elapsed);
            }
            match self.rx.recv_timeout(remaining) {
                Ok(()) => return Ok(WaitOutcome::Cancelled),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    std::thread::sleep(remaining);
                    return Ok(WaitOutcome::Elapsed);
                }
            }
        }
    }
}
