//! Bloch Command-Line Interface
//!
//! The main entry point for the `bloch` tool: drive a single-qubit state
//! around the Bloch sphere with rotations and gates.
//!
//! ```text
//! bloch run h "rz 90" --trace
//! bloch rotate y -90 --from 1 --format json
//! echo "h\nshow" | bloch shell
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::common::Output;
use commands::{inspect, run, shell, version};
use config::Config;

/// Bloch - single-qubit state engine on the Bloch sphere
#[derive(Parser)]
#[command(name = "bloch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (YAML)
    #[arg(short, long, global = true, env = "BLOCH_CONFIG")]
    config: Option<String>,

    /// Output format (table, json); overrides the config file
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a sequence of actions and print the final state
    Run {
        /// Actions, one per argument (e.g. "h", "rx 90", "set 0 1 0")
        actions: Vec<String>,

        /// Script file (.yaml/.yml, .json, or one action per line)
        #[arg(short, long)]
        script: Option<String>,

        /// Starting state (named state or x,y,z)
        #[arg(long, allow_hyphen_values = true)]
        from: Option<String>,

        /// Print the state after every action
        #[arg(long)]
        trace: bool,
    },

    /// Apply a single gate
    Gate {
        /// Gate token (H, X, Y, Z, S, T); others are the identity
        token: String,

        /// Starting state (named state or x,y,z)
        #[arg(long, allow_hyphen_values = true)]
        from: Option<String>,
    },

    /// Rotate about an axis
    Rotate {
        /// Rotation axis (x, y, z)
        axis: String,

        /// Signed angle in degrees
        #[arg(allow_negative_numbers = true)]
        degrees: f64,

        /// Starting state (named state or x,y,z)
        #[arg(long, allow_hyphen_values = true)]
        from: Option<String>,
    },

    /// Show the complex amplitudes of a state
    Amplitudes {
        /// State to show (named state or x,y,z)
        #[arg(long, allow_hyphen_values = true)]
        from: Option<String>,
    },

    /// Read actions interactively from stdin
    Shell {
        /// Starting state (named state or x,y,z)
        #[arg(long, allow_hyphen_values = true)]
        from: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    // Setup logging: the config level wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = config.logging.level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Execute command
    let result = Output::from_config(&config, cli.format.as_deref()).and_then(|output| {
        match cli.command {
            Commands::Run {
                actions,
                script,
                from,
                trace,
            } => run::execute(
                &config,
                output,
                &actions,
                script.as_deref(),
                from.as_deref(),
                trace,
            ),

            Commands::Gate { token, from } => {
                inspect::execute_gate(&config, output, &token, from.as_deref())
            }

            Commands::Rotate {
                axis,
                degrees,
                from,
            } => inspect::execute_rotate(&config, output, &axis, degrees, from.as_deref()),

            Commands::Amplitudes { from } => {
                inspect::execute_amplitudes(&config, output, from.as_deref())
            }

            Commands::Shell { from } => shell::execute(&config, output, from.as_deref()),

            Commands::Version => {
                version::execute();
                Ok(())
            }
        }
    });

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
