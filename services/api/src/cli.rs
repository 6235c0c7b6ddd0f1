use crate::commands::{
    run_batch, run_catalog, run_evaluate, run_fields, BatchArgs, CatalogArgs, EvaluateArgs,
    FieldsArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use radgrade::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "radgrade",
    about = "Browse and evaluate radiologic classification systems from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List categories and the classification systems under them
    Catalog(CatalogArgs),
    /// Show the input fields of a classification system
    Fields(FieldsArgs),
    /// Evaluate a single case starting from the field defaults
    Evaluate(EvaluateArgs),
    /// Evaluate every row of a CSV file against one system
    Batch(BatchArgs),
    /// Walk through the reference scenarios
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog(args) => run_catalog(args),
        Command::Fields(args) => run_fields(args),
        Command::Evaluate(args) => run_evaluate(args),
        Command::Batch(args) => run_batch(args),
        Command::Demo(args) => run_demo(args),
    }
}
