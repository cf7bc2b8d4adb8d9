use clap::Parser;
use gds_context::cli::{Cli, Commands, run_command};
use gds_context::corpus::Corpus;
use gds_context::server::DocsServer;
use rmcp::{ServiceExt, transport::stdio};
use std::io::Write;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    gds_context::tracing::init(level);

    let config = cli.config();
    tracing::debug!(corpus = %config.corpus_root.display(), scheme = %config.scheme, "Resolved configuration");
    let corpus = Corpus::new(config);

    if matches!(cli.command, Commands::Serve) {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting gds-context MCP server");

        // Create and serve the MCP server over stdio
        let service = DocsServer::new(corpus)
            .serve(stdio())
            .await
            .inspect_err(|e| tracing::error!("Error serving MCP server: {:?}", e))?;
        service.waiting().await?;
        return Ok(ExitCode::SUCCESS);
    }

    match run_command(&corpus, &cli.command).await {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.to_report());
            Ok(ExitCode::FAILURE)
        }
    }
}
