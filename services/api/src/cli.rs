use crate::demo::{run_cohort_report, run_demo, run_report, CohortArgs, DemoArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use longevity::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Longevity Assessment Service",
    about = "Score lifestyle surveys into biological age estimates from the command line or over HTTP",
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
    /// Score survey submissions without starting the server
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
    /// Run an end-to-end demo on a built-in sample profile
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// Score one submission from an answers JSON file
    Report(ReportArgs),
    /// Batch-score a cohort CSV export
    Cohort(CohortArgs),
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
        Command::Assessment {
            command: AssessmentCommand::Report(args),
        } => run_report(args),
        Command::Assessment {
            command: AssessmentCommand::Cohort(args),
        } => run_cohort_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
