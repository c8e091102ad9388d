use crate::export::{ExportConfig, ExportDestination};
use clap::Parser;
use std::path::PathBuf;

/// Export ledger accounts to a GnuCash account CSV
#[derive(Parser, Debug)]
#[command(name = "gnc-account-export")]
#[command(about = "Export ledger accounts to a GnuCash account CSV", long_about = None)]
pub struct CliArgs {
    /// Account listing CSV to export
    #[arg(value_name = "INPUT", help = "Path to the account listing CSV file")]
    pub input_file: PathBuf,

    /// Column separator for the export
    #[arg(
        short = 's',
        long = "separator",
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_separator,
        help = "Single-character column separator ('\\t' or 'tab' for TAB)"
    )]
    pub separator: char,

    /// Destination file for the export
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Write the export to PATH instead of stdout"
    )]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", help = "Log debug output to stderr")]
    pub verbose: bool,
}

impl CliArgs {
    /// Build the export configuration from the parsed arguments
    pub fn to_export_config(&self) -> ExportConfig {
        let destination = match &self.output {
            Some(path) => ExportDestination::File(path.clone()),
            None => ExportDestination::Stdout,
        };

        ExportConfig::new(self.separator, destination)
    }
}

/// Parse a separator argument into a single character
fn parse_separator(value: &str) -> Result<char, String> {
    if value == "\\t" || value.eq_ignore_ascii_case("tab") {
        return Ok('\t');
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!(
            "separator must be a single character, got '{}'",
            value
        )),
    }
}
