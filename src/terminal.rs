use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::interrupt;
use crate::ticker::{Wait, WaitOutcome};

/// Keeps the terminal in raw mode for its lifetime.
///
/// Raw mode turns a typed Ctrl+C into an ordinary key event instead of
/// SIGINT, which lets the wait between ticks see it and end the loop
/// normally. Signals sent from outside still arrive through `interrupt`.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> Result<Self, String> {
        terminal::enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {}", e))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Longest single event poll, so a process interrupt is noticed promptly.
const POLL_SLICE: Duration = Duration::from_millis(50);

/// Waits by polling terminal events until the deadline passes, a
/// cancellation key is pressed, or the process receives an interrupt.
pub struct TerminalWait {
    interrupts: Receiver<()>,
    _raw: RawModeGuard,
}

impl TerminalWait {
    pub fn new(interrupts: Receiver<()>) -> Result<Self, String> {
        Ok(Self {
            interrupts,
            _raw: RawModeGuard::enable()?,
        })
    }
}

impl Wait for TerminalWait {
    fn wait(&mut self, duration: Duration) -> Result<WaitOutcome, String> {
        // No deadline means the wait only ends on cancellation.
        let deadline = Instant::now().checked_add(duration);

        loop {
            if interrupt::pending(&self.interrupts) {
                return Ok(WaitOutcome::Cancelled);
            }

            let remaining = match deadline {
                Some(d) => d.saturating_duration_since(Instant::now()),
                None => POLL_SLICE,
            };
            if remaining.is_zero() {
                return Ok(WaitOutcome::Elapsed);
            }

            if !event::poll(remaining.min(POLL_SLICE))
                .map_err(|e| format!("event poll error: {}", e))?
            {
                continue;
            }

            let ev = event::read().map_err(|e| format!("event read error: {}", e))?;
            if let Event::Key(key) = ev {
                if is_cancel_key(&key) {
                    return Ok(WaitOutcome::Cancelled);
                }
            }
        }
    }
}

/// Keys that stop the ticker: Ctrl+C or Esc.
pub fn is_cancel_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
