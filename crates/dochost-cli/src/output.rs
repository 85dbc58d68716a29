//! Output formatting for command results.
//!
//! Text output prints the bare resolved value so results compose in shell
//! pipelines; JSON output wraps them for scripting.

use clap::ValueEnum;

/// Output format selector shared by all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Text,
    /// Machine-readable JSON
    Json,
}

/// Print a single resolved value in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_resolved(format: OutputFormat, key: &str, value: &str) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{value}"),
        OutputFormat::Json => {
            let mut object = serde_json::Map::new();
            object.insert(
                key.to_string(),
                serde_json::Value::String(value.to_string()),
            );
            println!("{}", serde_json::to_string(&object)?);
        },
    }
    Ok(())
}
