//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - single-qubit Bloch-sphere state engine",
        style("bloch").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  bloch-core  Normalizer, axis rotations, amplitude codec, gates");
    println!("  bloch-cli   Command-line interface and interactive shell");
    println!();
    println!("Gates:      H X Y Z S T (other tokens are the identity)");
    println!("License:    {}", style("Apache-2.0").dim());
}
