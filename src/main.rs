mod interrupt;
mod note;
mod terminal;
mod ticker;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal};

use interrupt::ChannelWait;
use ticker::{Console, Ticker, TickerConfig};

const DEFAULT_INTERVAL_SECS: f64 = 5.0;

#[derive(Parser)]
#[command(name = "notetick", about = "Show a random note name at a fixed interval")]
#[command(version)]
struct Cli {
    /// Seconds between notes
    #[arg(long, default_value_t = DEFAULT_INTERVAL_SECS)]
    interval: f64,

    /// Seed the random source for a reproducible sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many notes instead of waiting for Ctrl+C
    #[arg(long)]
    count: Option<u64>,

    /// Print the note catalog and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        print_catalog();
        return;
    }

    let config = TickerConfig::new(cli.interval, cli.count).unwrap_or_else(|e| {
        eprintln!("Invalid settings: {}", e);
        std::process::exit(1);
    });

    let rng = match cli.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    if let Err(e) = run(Ticker::new(rng, config)) {
        eprintln!("Ticker error: {}", e);
        std::process::exit(1);
    }
}

fn run(mut ticker: Ticker<StdRng>) -> Result<(), String> {
    let interrupts = interrupt::install()?;

    let stdin_tty = io::stdin().is_terminal();
    if stdin_tty {
        let mut waiter = terminal::TerminalWait::new(interrupts)?;
        let mut console = if raw_line_endings(stdin_tty, io::stdout().is_terminal()) {
            Console::raw(io::stdout())
        } else {
            Console::plain(io::stdout())
        };
        ticker.run_with_banner(&mut console, &mut waiter)?;
    } else {
        let mut console = Console::plain(io::stdout());
        ticker.run_with_banner(&mut console, &mut ChannelWait::new(interrupts))?;
    }
    Ok(())
}

/// Raw mode only changes line handling when stdout is the terminal too.
fn raw_line_endings(stdin_tty: bool, stdout_tty: bool) -> bool {
    stdin_tty && stdout_tty
}

fn print_catalog() {
    println!("Notes: {}", note::CATALOG.len());
    println!();
    for entry in &note::CATALOG {
        let same: Vec<&str> = note::spellings(entry.pitch)
            .filter(|l| *l != entry.label)
            .collect();
        println!(
            "  {:<3} pitch class {:>2}{}",
            entry.label,
            entry.pitch.semitone(),
            if same.is_empty() {
                String::new()
            } else {
                format!("  (same as {})", same.join(", "))
            }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirected_stdout_gets_plain_endings() {
        assert!(raw_line_endings(true, true));
        assert!(!raw_line_endings(true, false));
        assert!(!raw_line_endings(false, true));
        assert!(!raw_line_endings(false, false));
    }

    #[test]
    fn test_default_interval() {
        let cli = Cli::parse_from(["notetick"]);
        assert_eq!(cli.interval, DEFAULT_INTERVAL_SECS);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.count, None);
    }

    #[test]
    fn test_huge_interval_rejected() {
        let cli = Cli::parse_from(["notetick", "--interval", "1e30", "--count", "1"]);
        assert!(TickerConfig::new(cli.interval, cli.count).is_err());
    }
}
