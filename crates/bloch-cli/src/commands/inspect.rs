//! One-shot gate, rotate and amplitude commands.

use anyhow::{Context, Result};
use console::style;

use bloch_core::Axis;

use super::common::{Output, OutputFormat, create_session, print_amplitudes, print_state};
use crate::config::Config;

/// Execute the gate command: apply one gate and print the result.
pub fn execute_gate(config: &Config, output: Output, token: &str, from: Option<&str>) -> Result<()> {
    let mut session = create_session(config, from)?;
    let before = session.state();
    let applied = session.apply_gate(token);

    if output.format == OutputFormat::Table {
        match applied {
            Some(gate) => println!(
                "{} {} {} → {}",
                style("✓").green().bold(),
                style(gate).yellow(),
                before,
                session.state()
            ),
            None => println!(
                "{} Unknown gate '{}' applied as identity",
                style("!").yellow().bold(),
                token
            ),
        }
    }
    print_state(&session.snapshot(), output)
}

/// Execute the rotate command: rotate once and print the result.
pub fn execute_rotate(
    config: &Config,
    output: Output,
    axis: &str,
    degrees: f64,
    from: Option<&str>,
) -> Result<()> {
    let axis: Axis = axis
        .parse()
        .with_context(|| format!("Invalid rotation axis: {axis}"))?;
    let mut session = create_session(config, from)?;
    let before = session.state();
    let applied = session.rotate(axis, degrees);

    if output.format == OutputFormat::Table {
        match applied {
            Some(delta) => println!(
                "{} R{}({}°) {} → {}",
                style("✓").green().bold(),
                style(axis).yellow(),
                delta,
                before,
                session.state()
            ),
            None => println!(
                "{} Non-finite rotation ignored",
                style("!").yellow().bold()
            ),
        }
    }
    print_state(&session.snapshot(), output)
}

/// Execute the amplitudes command: show the state as `(alpha, beta)`.
pub fn execute_amplitudes(config: &Config, output: Output, from: Option<&str>) -> Result<()> {
    let session = create_session(config, from)?;
    if output.format == OutputFormat::Table {
        println!("{} {}", style("State").cyan().bold(), session.state());
    }
    print_amplitudes(&session.amplitudes(), output)
}
