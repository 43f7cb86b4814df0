mod commands;
mod context;
mod github;
mod output;
mod plan;
mod traits;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{RenderCommand, ReportCommand};
use context::Context;

#[derive(Parser)]
#[command(name = "tfplan-summary")]
#[command(about = "Summarize Terraform plan output as a markdown report for CI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish the plan summary to the step output and job summary
    Report,

    /// Render a plan file (or stdin) as markdown locally
    Render {
        /// Path to a file with plan output (reads stdin when omitted)
        path: Option<String>,

        /// Print the parsed summary as JSON instead of markdown
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report => {
            let ctx = Context::new();

            // Failures are already reported through the platform; signal the
            // failed run via the exit code without an unhandled error.
            if !ReportCommand::run(&ctx).await {
                std::process::exit(1);
            }
        }
        Commands::Render { path, json } => {
            RenderCommand::execute(path.as_deref(), json)?;
        }
    }

    Ok(())
}
