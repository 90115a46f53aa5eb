//! installcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use installcheck::cli::{Cli, VerifyCommand};
use installcheck::ui::{Output, Theme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("installcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("installcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("installcheck starting with args: {:?}", cli);

    let theme = Theme::detect(cli.no_color);
    let error_theme = theme.clone();
    let mut output = Output::stdout(theme);

    let result = VerifyCommand::from_cli(&cli).and_then(|command| command.execute(&mut output));

    match result {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("{}", error_theme.format_error(&format!("Error: {}", e)));
            ExitCode::from(1)
        }
    }
}
