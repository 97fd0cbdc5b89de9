use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use railbook_core::VERSION;

/// Railbook - a minimal ledger of train-booking records
#[derive(Parser)]
#[command(name = "railbook")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file
    #[arg(short, long, global = true, env = "RAILBOOK_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Write the demo records after creating the store
    #[arg(long)]
    pub seed: bool,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `invoke` command
#[derive(Args)]
pub struct InvokeArgs {
    /// Operation name (queryRecord, seedLedger, createRecord, queryAllRecords, updateStatus)
    #[arg(value_name = "FUNCTION")]
    pub function: String,

    /// Positional operation arguments
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `create` command
#[derive(Args)]
pub struct CreateArgs {
    /// Record key (e.g., REC5)
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Passenger name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Category (e.g., Male, Female)
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Route (e.g., Bangalore-Mysore)
    #[arg(value_name = "ROUTE")]
    pub route: String,

    /// Service tier (e.g., AC, Sleeper)
    #[arg(value_name = "TIER")]
    pub tier: String,

    /// Booking status (e.g., Confirmed)
    #[arg(value_name = "STATUS")]
    pub status: String,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Record key
    #[arg(value_name = "KEY")]
    pub key: String,
}

/// Arguments for the `status` command
#[derive(Args)]
pub struct StatusArgs {
    /// Record key
    #[arg(value_name = "KEY")]
    pub key: String,

    /// New status label
    #[arg(value_name = "STATUS")]
    pub status: String,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Destination file
    #[arg(value_name = "DEST")]
    pub destination: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a config file and an empty store
    Init(InitArgs),

    /// Call an operation by name, as a ledger host would
    Invoke(InvokeArgs),

    /// Write the demo records REC0..REC4
    Seed,

    /// Create or overwrite a record
    Create(CreateArgs),

    /// Show a record by key
    Show(ShowArgs),

    /// List all records in the REC range
    List,

    /// Change the status of a record
    Status(StatusArgs),

    /// Export all records as JSON
    Export(ExportArgs),

    /// Check store integrity
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
