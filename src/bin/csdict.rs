//! csdict Binary
//!
//! Interactive dictionary client. The only accepted option is `-d`.

use std::io;
use std::process::ExitCode;

use csdict::{Config, Options, Repl, Session};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries protocol output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let options = match Options::parse_from_args(std::env::args_os()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            tracing::debug!("Rejected options: {:?}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(banner) = options.banner() {
        println!("{}", banner);
    }

    tracing::debug!("csdict v{}", csdict::VERSION);

    let config = Config::builder().debug(options.debug).build();
    let stdin = io::stdin();
    let mut repl = Repl::new(Session::new(config), stdin.lock(), io::stdout(), io::stderr());

    match repl.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Terminating: {}", e);
            ExitCode::FAILURE
        }
    }
}
