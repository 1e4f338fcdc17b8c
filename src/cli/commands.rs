use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "costscout", version, about = "AWS cost-visibility scanner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan an account and print the cost findings
    Scan(ScanArgs),
    /// Start the HTTP REST API server
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// AWS access key ID (falls back to AWS_ACCESS_KEY_ID)
    #[arg(long)]
    pub access_key_id: Option<String>,

    /// AWS secret access key (falls back to AWS_SECRET_ACCESS_KEY)
    #[arg(long)]
    pub secret_access_key: Option<String>,

    /// Region to scan; repeat for several. Defaults to the standard
    /// two-region set.
    #[arg(short, long)]
    pub region: Vec<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the raw JSON scan result instead of the summary
    #[arg(long)]
    pub json: bool,

    /// Write a markdown report to this path
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
