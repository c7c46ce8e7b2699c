//! Interactive shell: one action per line against a live session.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use console::style;
use tracing::{debug, info};

use bloch_core::{Action, BlochSession};

use super::common::{Output, create_session, print_amplitudes, print_state};
use crate::config::Config;

/// A parsed shell line.
#[derive(Debug, PartialEq)]
enum Command {
    Apply(Action),
    Show,
    Amplitudes,
    Help,
    Quit,
    Empty,
}

fn parse_command(line: &str) -> Result<Command> {
    let line = line.split('#').next().unwrap_or("").trim();
    let cmd = match line.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "show" | "state" => Command::Show,
        "amp" | "amplitudes" => Command::Amplitudes,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Apply(line.parse()?),
    };
    Ok(cmd)
}

fn print_help() {
    println!("{}", style("Commands").cyan().bold());
    println!("  h | x | y | z | s | t      apply a gate");
    println!("  gate TOKEN                 apply a gate (unknown tokens are the identity)");
    println!("  rotate AXIS DEG, rx DEG    rotate about x, y or z");
    println!("  set X Y Z                  jump to a normalized point");
    println!("  state LABEL                jump to 0, 1, +, -, +i or -i");
    println!("  reset                      back to |0⟩");
    println!("  show | amplitudes          print the current state");
    println!("  quit                       leave the shell");
}

/// Execute the shell command, reading from stdin until EOF or `quit`.
pub fn execute(config: &Config, output: Output, from: Option<&str>) -> Result<()> {
    let mut session = create_session(config, from)?;
    let interactive = console::user_attended();
    info!(start = %session.state(), interactive, "shell started");

    if interactive {
        println!(
            "{} Bloch shell at {} (type {} for commands)",
            style("→").cyan().bold(),
            style(session.state()).green(),
            style("help").yellow()
        );
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{} ", style("bloch>").cyan());
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        if !step(&mut session, &line?, output, interactive)? {
            break;
        }
    }

    if !interactive {
        print_state(&session.snapshot(), output)?;
    }
    Ok(())
}

/// Handle one line. Returns `false` when the shell should exit.
fn step(session: &mut BlochSession, line: &str, output: Output, echo: bool) -> Result<bool> {
    match parse_command(line) {
        Ok(Command::Quit) => return Ok(false),
        Ok(Command::Empty) => {}
        Ok(Command::Help) => print_help(),
        Ok(Command::Show) => print_state(&session.snapshot(), output)?,
        Ok(Command::Amplitudes) => print_amplitudes(&session.amplitudes(), output)?,
        Ok(Command::Apply(action)) => {
            debug!(%action, "shell action");
            session.apply(&action);
            if echo {
                println!("  {}", session.state());
            }
        }
        Err(e) => eprintln!("{} {}", style("error:").red().bold(), e),
    }
    Ok(true)
}
