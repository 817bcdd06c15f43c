//! `js-questions` binary.

use clap::Parser;
use js_questions_cli::cli::Cli;
use js_questions_cli::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Err(error) = init_logging(&cli.verbosity) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    if let Err(error) = js_questions_cli::run(cli).await {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
