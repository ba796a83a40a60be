//! The tick loop: draw a note, show it, wait, repeat until cancelled.
//!
//! The random source and the wait are both passed in, so a seeded `StdRng`
//! and a scripted `Wait` make a run fully reproducible.

use std::io::Write;
use std::time::Duration;

use rand::Rng;

use crate::note::{CATALOG, CatalogEntry};

/// Validated run settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerConfig {
    pub interval: Duration,
    /// Stop after this many ticks; `None` runs until cancelled
    pub limit: Option<u64>,
}

impl TickerConfig {
    pub fn new(interval_secs: f64, limit: Option<u64>) -> Result<Self, String> {
        let interval = Duration::try_from_secs_f64(interval_secs)
            .map_err(|e| format!("invalid interval {}: {}", interval_secs, e))?;
        if limit == Some(0) {
            return Err("count must be at least 1".to_string());
        }
        if interval.is_zero() && limit.is_none() {
            return Err("an interval of 0 seconds requires a count".to_string());
        }
        Ok(Self {
            interval,
            limit,
        })
    }
}

/// How a wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Elapsed,
    Cancelled,
}

/// The suspension point between ticks. Implementations must return
/// `Cancelled` as soon as the user asks to stop rather than finishing the
/// remaining time.
pub trait Wait {
    fn wait(&mut self, duration: Duration) -> Result<WaitOutcome, String>;
}

/// Why the loop stopped, with the number of notes shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stopped {
    Cancelled { ticks: u64 },
    Finished { ticks: u64 },
}

/// Line-oriented output. In raw terminal mode a bare `\n` does not return
/// the cursor, so lines end in `\r\n` there.
pub struct Console<W: Write> {
    out: W,
    eol: &'static str,
}

impl<W: Write> Console<W> {
    pub fn plain(out: W) -> Self {
        Self { out, eol: "\n" }
    }

    pub fn raw(out: W) -> Self {
        Self { out, eol: "\r\n" }
    }

    pub fn line(&mut self, text: &str) -> Result<(), String> {
        write!(self.out, "{}{}", text, self.eol)
            .and_then(|_| self.out.flush())
            .map_err(|e| format!("failed to write output: {}", e))
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

pub struct Ticker<R: Rng> {
    rng: R,
    config: TickerConfig,
}

impl<R: Rng> Ticker<R> {
    pub fn new(rng: R, config: TickerConfig) -> Self {
        Self { rng, config }
    }

    /// Uniform draw over the whole catalog, repeats allowed.
    pub fn draw(&mut self) -> &'static CatalogEntry {
        &CATALOG[self.rng.random_range(0..CATALOG.len())]
    }

    /// Run the loop until the wait reports cancellation or the tick limit is
    /// reached. A cancelled wait never leads to another draw.
    pub fn run<W: Write, T: Wait>(
        &mut self,
        console: &mut Console<W>,
        waiter: &mut T,
    ) -> Result<Stopped, String> {
        let mut ticks: u64 = 0;

        loop {
            let note = self.draw();
            console.line("")?;
            console.line(&format!("Random Note: {}", note.label))?;
            ticks += 1;

            if self.config.limit == Some(ticks) {
                return Ok(Stopped::Finished { ticks });
            }

            if waiter.wait(self.config.interval)? == WaitOutcome::Cancelled {
                return Ok(Stopped::Cancelled { ticks });
            }
        }
    }

    /// Banner, the loop itself, then the closing message.
    pub fn run_with_banner<W: Write, T: Wait>(
        &mut self,
        console: &mut Console<W>,
        waiter: &mut T,
    ) -> Result<Stopped, String> {
        print_banner(console, self.config.interval)?;
        let stopped = self.run(console, waiter)?;
        print_shutdown(console, stopped)?;
        Ok(stopped)
    }
}

pub fn print_banner<W: Write>(console: &mut Console<W>, interval: Duration) -> Result<(), String> {
    console.line("--- Random Note Generator Started ---")?;
    console.line(&format!(
        "Notes will be displayed every {} seconds.",
        interval.as_secs_f64()
    ))?;
    console.line("Press Ctrl+C to stop the script.")
}

pub fn print_shutdown<W: Write>(console: &mut Console<W>, stopped: Stopped) -> Result<(), String> {
    console.line("")?;
    match stopped {
        Stopped::Cancelled { .. } => {
            console.line("--- Note Generator Stopped by User ---")?;
            console.line("Thank you for using the random note generator!")
        }
        Stopped::Finished { ticks } => console.line(&format!(
            "--- Note Generator Finished after {} tick{} ---",
            ticks,
            if ticks != 1 { "s" } else { "" }
        )),
    }
}
