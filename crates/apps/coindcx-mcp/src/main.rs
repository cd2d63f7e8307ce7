//! CoinDCX MCP server binary entry point.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

use coindcx_mcp::{cli::Cli, run_server, McpError};

#[tokio::main]
async fn main() {
    // Variables already in the environment win over .env entries.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        print_error(&e);
        std::process::exit(1);
    }
}

/// Install the tracing subscriber. Logs go to stderr; stdout carries MCP.
fn init_logging(verbose: bool) {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    if verbose {
        if let Ok(directive) = "coindcx=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    run_server(cli.client_config())
        .await
        .context("MCP server error")
}

/// Print a user-friendly error message with error code and recovery hint.
fn print_error(e: &anyhow::Error) {
    match e.downcast_ref::<McpError>() {
        Some(mcp) => {
            let code = mcp.error_code();
            eprintln!(
                "{} [{}]: {:#}",
                "Error".red().bold(),
                code.to_string().yellow(),
                e
            );
            eprintln!("{}: {}", "Hint".cyan(), code.suggestion());
        }
        None => eprintln!("{}: {:#}", "Error".red().bold(), e),
    }
}
