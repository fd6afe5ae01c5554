//! chart-doc-gen
//!
//! Generates a chart's README parameter reference from its values file, an
//! optional values JSON Schema and a document template.

mod cli_config;
mod generate;
mod output;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use generate::GenerateArgs;

const DEFAULT_LOG_FILTER: &str = "chart_doc_gen=warn,chart_doc_tooling=warn";

#[derive(Debug, Parser)]
#[command(name = "chart-doc-gen")]
#[command(version)]
#[command(about = "Generate a chart's parameter reference from its values file and JSON Schema")]
#[command(styles = output::clap_styles())]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = cli_config::load_cli_config(cli.generate.chart_dir());

    let document = match generate::generate(&cli.generate, &config) {
        Ok(document) => document,
        Err(e) => {
            // Every pipeline error already carries its cause in its message.
            output::error(&e);
            output::hint("Set RUST_LOG=chart_doc_tooling=debug for more detail.");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(document.as_bytes()).and_then(|()| stdout.flush()) {
        output::error(format!("failed to write document: {e}"));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
