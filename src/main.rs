//! `cryptol` 바이너리 진입점.

use std::process::ExitCode;

use cryptol_cli::application::ports::Reporter;
use cryptol_cli::interface::cli::composition::reporter;
use cryptol_cli::interface::cli::{Cli, ParseFailure};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = match Cli::parse_options(std::env::args_os()) {
        Ok(options) => options,
        Err(ParseFailure::Syntax(err)) => {
            reporter().usage(&[err.render().to_string()]);
            return ExitCode::from(2);
        }
        Err(ParseFailure::Semantic(errors)) => {
            reporter().usage(errors.messages());
            return ExitCode::from(2);
        }
    };

    match cryptol_cli::run(&options) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            reporter().error(&format!("{err:#}"));
            ExitCode::from(1)
        }
    }
}
