use crate::demo::{run_convert, run_demo, ConvertArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use toolhub::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Toolhub",
    about = "Run the Toolhub conversion and scoring service from the command line",
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
    /// Convert a single value between two units and print the result
    Convert(ConvertArgs),
    /// Print a conversion showcase and sample scoring reports
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
        Command::Convert(args) => run_convert(args),
        Command::Demo(args) => run_demo(args),
    }
}
