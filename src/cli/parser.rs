use crate::models::{PlanType, ProviderFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for enrollcheck
/// CLI application to reconcile ADP enrollments against insurance extracts
#[derive(Parser)]
#[command(
    name = "enrollcheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile ADP benefit enrollments against insurance provider extracts",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or shared setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Reconcile one provider extract against the ADP export
    Report {
        #[arg(long, value_enum)]
        provider: ProviderFormat,

        #[arg(long, value_enum)]
        plan: PlanType,

        /// ADP enrollment export (.xlsx/.xls)
        #[arg(long, value_name = "FILE")]
        adp: PathBuf,

        /// Provider extract; repeat for several BFS files
        #[arg(long = "insurance", value_name = "FILE", required = true)]
        insurance: Vec<PathBuf>,

        /// Customer number to SSN mapping (Cigna billing only)
        #[arg(long = "id-file", value_name = "FILE")]
        id_file: Option<PathBuf>,

        /// Output folder (defaults to `output_folder` from the config)
        #[arg(long, short = 'o', value_name = "DIR")]
        output: Option<PathBuf>,

        #[arg(long = "no-overwrite", help = "Fail if the report file already exists")]
        no_overwrite: bool,

        #[arg(long, help = "Also write a CSV copy of the report")]
        csv: bool,
    },

    /// Run several reports described in a YAML job file
    Batch {
        #[arg(long, value_name = "FILE")]
        jobs: PathBuf,
    },

    /// List supported providers, plan types and required columns
    Formats,
}
