//! Run command implementation.

use anyhow::Result;
use console::style;
use tracing::info;

use bloch_core::Action;

use super::common::{
    Output, OutputFormat, create_session, load_script, parse_actions, print_state,
};
use crate::config::Config;

/// Execute the run command.
pub fn execute(
    config: &Config,
    output: Output,
    actions: &[String],
    script: Option<&str>,
    from: Option<&str>,
    trace: bool,
) -> Result<()> {
    let mut steps: Vec<Action> = match script {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };
    steps.extend(parse_actions(actions)?);

    if steps.is_empty() {
        anyhow::bail!("Nothing to run: pass actions or --script");
    }

    let mut session = create_session(config, from)?;
    info!(steps = steps.len(), start = %session.state(), "running actions");

    let show_steps = trace && output.format == OutputFormat::Table;
    if show_steps {
        println!(
            "{} Running {} action(s) from {}",
            style("→").cyan().bold(),
            steps.len(),
            style(session.state()).green()
        );
    }

    for (idx, action) in steps.iter().enumerate() {
        session.apply(action);
        if show_steps {
            println!(
                "  {:>3}. {:<18} {}",
                idx + 1,
                style(action).yellow(),
                session.state()
            );
        }
    }

    if show_steps {
        println!();
    }
    print_state(&session.snapshot(), output)
}
