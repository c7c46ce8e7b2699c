//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use bloch_core::{Action, AmplitudePair, BlochSession, StateSnapshot, parse_state};

use crate::config::Config;

/// How state readouts are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Parse an output format name.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Unknown output format: '{other}'. Available: table, json"),
        }
    }
}

/// Rendering settings shared by all commands.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub format: OutputFormat,
    pub precision: usize,
}

impl Output {
    /// Build from config, with an optional command-line override.
    pub fn from_config(config: &Config, format_override: Option<&str>) -> Result<Self> {
        let name = format_override.unwrap_or(config.output.format.as_str());
        let format = OutputFormat::parse(name)?;
        Ok(Self {
            format,
            precision: config.output.precision,
        })
    }
}

/// Create a session from config, starting at `from` if given.
pub fn create_session(config: &Config, from: Option<&str>) -> Result<BlochSession> {
    let start = match from {
        Some(spec) => {
            parse_state(spec).with_context(|| format!("Invalid --from state: {spec}"))?
        }
        None => config.initial_state()?,
    };
    Ok(BlochSession::with_options(config.session_options()).starting_at(start))
}

/// Parse one action per argument.
pub fn parse_actions<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Action>> {
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            line.parse::<Action>()
                .with_context(|| format!("Failed to parse action: {line}"))
        })
        .collect()
}

/// Load an action script.
///
/// `.yaml`/`.yml` and `.json` files hold a list of tagged actions; anything
/// else is read as one action line per row, with `#` comments.
pub fn load_script(path: &str) -> Result<Vec<Action>> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext.to_lowercase().as_str() {
        "yaml" | "yml" => serde_yaml_ng::from_str(&source)
            .map_err(|e| anyhow::anyhow!("YAML script error in {path}: {e}")),
        "json" => serde_json::from_str(&source)
            .map_err(|e| anyhow::anyhow!("JSON script error in {path}: {e}")),
        _ => parse_lines(&source).with_context(|| format!("In script {path}")),
    }
}

/// Parse line-oriented action text, skipping blanks and `#` comments.
pub fn parse_lines(source: &str) -> Result<Vec<Action>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let line = raw.split('#').next().unwrap_or("").trim();
            (!line.is_empty()).then_some((idx + 1, line))
        })
        .map(|(lineno, line)| {
            line.parse::<Action>()
                .map_err(|e| anyhow::anyhow!("line {lineno}: {e}"))
        })
        .collect()
}

/// Print a state readout.
pub fn print_state(snapshot: &StateSnapshot, output: Output) -> Result<()> {
    match output.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(snapshot)?);
        }
        OutputFormat::Table => {
            let p = output.precision;
            println!(
                "{} ({:.p$}, {:.p$}, {:.p$})",
                style("State").cyan().bold(),
                snapshot.x,
                snapshot.y,
                snapshot.z
            );
            println!("  θ (polar)    {:>10.p$}°", snapshot.theta_deg);
            println!("  φ (azimuth)  {:>10.p$}°", snapshot.phi_deg);
            println!("  radius       {:>10.p$}", snapshot.radius);
            println!("  P(|0⟩)       {:>10.p$}", snapshot.p0);
            println!("  P(|1⟩)       {:>10.p$}", snapshot.p1);
            if snapshot.reset_epoch > 0 {
                println!("  resets       {:>10}", style(snapshot.reset_epoch).dim());
            }
        }
    }
    Ok(())
}

/// Print an amplitude pair.
pub fn print_amplitudes(pair: &AmplitudePair, output: Output) -> Result<()> {
    match output.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(pair)?);
        }
        OutputFormat::Table => {
            let p = output.precision;
            let (p0, p1) = pair.probabilities();
            println!("{}", style("Amplitudes").cyan().bold());
            println!(
                "  α = {:>+.p$} {:>+.p$}i   |α|² = {:.p$}",
                pair.alpha.re, pair.alpha.im, p0
            );
            println!(
                "  β = {:>+.p$} {:>+.p$}i   |β|² = {:.p$}",
                pair.beta.re, pair.beta.im, p1
            );
        }
    }
    Ok(())
}
