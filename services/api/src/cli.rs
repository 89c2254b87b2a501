use crate::demo::{print_question_bank, run_demo, DemoArgs};
use crate::server;
use careerbot::error::AppError;
use careerbot::workflows::guidance::GuidanceError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Guidance Bot",
    about = "Run the career guidance quiz service or walk through it from the command line",
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
    /// Answer the whole quiz non-interactively and write the PDF report
    Demo(DemoArgs),
    /// Print the question bank with the skill each question measures
    Questions,
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
        // The advisor client blocks, so the demo stays off the async workers.
        Command::Demo(args) => tokio::task::spawn_blocking(move || run_demo(args))
            .await
            .map_err(|err| AppError::Guidance(GuidanceError::Worker(err.to_string())))?,
        Command::Questions => {
            print_question_bank();
            Ok(())
        }
    }
}
