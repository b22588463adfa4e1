//! simput - Keyboard and mouse input simulator
//!
//! Drives the OS input injection facility as if a person were typing and
//! clicking: one-shot key taps, continuously held key sets, smooth pointer
//! motion and button clicks.

mod backend;
mod config;
mod keymap;
mod simulator;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use backend::{InjectionBackend, KeyCode, LoggingBackend};
use config::Config;
use simulator::{Simulator, BUTTON_OTHER, BUTTON_PRIMARY, BUTTON_SECONDARY};

/// simput - keyboard and mouse input simulator
#[derive(Parser)]
#[command(name = "simput")]
#[command(version = "0.1.0")]
#[command(about = "Simulate keyboard and mouse input", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log events instead of injecting them
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tap a key once (press and release)
    Tap {
        /// Key label (see `simput keys`) or raw key code
        key: String,
    },

    /// Hold a set of keys for a while, then release them
    Hold {
        /// Key labels or raw key codes
        keys: Vec<String>,

        /// How long to hold, in milliseconds
        #[arg(short, long, default_value_t = 1000)]
        millis: u64,

        /// Re-send the press set at this interval while holding (ms)
        #[arg(short, long)]
        repeat_millis: Option<u64>,
    },

    /// Move the pointer by a pixel displacement
    Move { dx: i32, dy: i32 },

    /// Move the pointer by a fraction of the display size
    MoveNorm { fx: f64, fy: f64 },

    /// Click a mouse button at the current pointer location
    Click {
        #[arg(short, long, default_value = "primary")]
        button: ButtonArg,
    },

    /// List the supported keys and their codes
    Keys,

    /// Run a short demonstration (move, click, tap 'a')
    Demo,

    /// Show system information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ButtonArg {
    Primary,
    Other,
    Secondary,
}

impl ButtonArg {
    fn mask(self) -> u8 {
        match self {
            ButtonArg::Primary => BUTTON_PRIMARY,
            ButtonArg::Other => BUTTON_OTHER,
            ButtonArg::Secondary => BUTTON_SECONDARY,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        Config::load(config_path)?
    } else {
        Config::load_default().unwrap_or_default()
    };

    match cli.command {
        Commands::Keys => {
            print_key_table();
            Ok(())
        }
        Commands::Info => {
            print_system_info(&config);
            Ok(())
        }
        command => {
            if cli.dry_run {
                run_command(LoggingBackend::new(), &config, command)
            } else {
                run_command(platform_backend()?, &config, command)
            }
        }
    }
}

#[cfg(target_os = "macos")]
fn platform_backend() -> anyhow::Result<backend::QuartzBackend> {
    Ok(backend::QuartzBackend::new()?)
}

#[cfg(not(target_os = "macos"))]
fn platform_backend() -> anyhow::Result<LoggingBackend> {
    Err(backend::InjectError::Unsupported(
        "input injection requires macOS; use --dry-run elsewhere".to_string(),
    )
    .into())
}

fn run_command<B: InjectionBackend>(
    backend: B,
    config: &Config,
    command: Commands,
) -> anyhow::Result<()> {
    let mut sim = Simulator::new(backend).with_step_size(config.pointer.step_size);

    match command {
        Commands::Tap { key } => {
            let code = parse_key(&key)?;
            tracing::debug!(
                "tapping {} ({code:#04x})",
                keymap::label_for_code(code).unwrap_or("?")
            );
            sim.tap_once(code)?;
        }
        Commands::Hold {
            keys,
            millis,
            repeat_millis,
        } => {
            let codes: Vec<KeyCode> = keys
                .iter()
                .map(|k| parse_key(k))
                .collect::<anyhow::Result<_>>()?;

            sim.reconcile(&codes)?;
            tracing::debug!("holding keys: {:?}", sim.held_keys());
            match repeat_millis {
                // Re-reconciling the same set keeps the press stream flowing
                // for targets that poll for key-down events.
                Some(interval) => {
                    let interval = interval.max(1);
                    let mut remaining = millis;
                    while remaining > 0 {
                        let slice = interval.min(remaining);
                        thread::sleep(Duration::from_millis(slice));
                        remaining -= slice;
                        sim.reconcile(&codes)?;
                    }
                }
                None => thread::sleep(Duration::from_millis(millis)),
            }
            sim.reconcile(&[])?;
        }
        Commands::Move { dx, dy } => {
            sim.move_relative(dx, dy)?;
        }
        Commands::MoveNorm { fx, fy } => {
            sim.move_normalized(fx, fy)?;
        }
        Commands::Click { button } => {
            sim.click(button.mask())?;
        }
        Commands::Demo => run_demo(&mut sim)?,
        Commands::Keys | Commands::Info => unreachable!("handled before backend setup"),
    }

    Ok(())
}

/// The original walkthrough: move the pointer, click, type a letter.
fn run_demo<B: InjectionBackend>(sim: &mut Simulator<B>) -> anyhow::Result<()> {
    println!("Simulating mouse move");
    sim.move_relative(100, 100)?;

    thread::sleep(Duration::from_secs(1));

    println!("Simulating single mouse click");
    sim.click(BUTTON_PRIMARY)?;

    thread::sleep(Duration::from_secs(1));

    println!("Simulating key press 'a'");
    if let Some(code) = keymap::code_for_label("a") {
        sim.tap_once(code)?;
    }

    Ok(())
}

/// Resolve a key argument: a label from the key table or a raw numeric code.
fn parse_key(arg: &str) -> anyhow::Result<KeyCode> {
    if let Some(code) = keymap::code_for_label(arg) {
        return Ok(code);
    }
    arg.parse::<KeyCode>()
        .map_err(|_| anyhow::anyhow!("unknown key '{arg}' (see `simput keys`)"))
}

fn print_key_table() {
    println!("{:<12} code", "key");
    println!("----------------------");
    for (code, label) in keymap::KEY_TABLE {
        println!("{label:<12} {code:#04x}");
    }
}

fn print_system_info(config: &Config) {
    println!("simput System Information");
    println!("=========================\n");

    println!("Platform: {}", backend::platform_name());
    println!("Keys in table: {}", keymap::KEY_TABLE.len());
    println!("Pointer step size: {} px", config.pointer.step_size);

    #[cfg(target_os = "macos")]
    {
        println!("\nmacOS Requirements:");
        println!("  - Accessibility permissions required");
        println!("  - System Settings > Privacy & Security > Accessibility");
    }

    #[cfg(not(target_os = "macos"))]
    {
        println!("\nNote: only --dry-run is available on this platform.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["simput", "keys"]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["simput", "--dry-run", "move", "100", "100"]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["simput", "hold", "w", "a", "--millis", "500"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("a").unwrap(), 0x00);
        assert_eq!(parse_key("space").unwrap(), 0x31);
        assert_eq!(parse_key("99").unwrap(), 99);
        assert!(parse_key("not-a-key").is_err());
    }
}
