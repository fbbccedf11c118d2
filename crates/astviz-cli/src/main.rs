use std::process::ExitCode;
use std::time::Instant;

use clap::{CommandFactory, Parser};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use astviz::{Cli, ExitStatus, run_main};
use astviz_error::Error;
use astviz_java::LangJava;

fn usage_error(err: &Error) -> ExitStatus {
    eprintln!("error: {}\n", err.message());
    let _ = Cli::command().print_help();
    ExitStatus::from_error(err)
}

pub fn run(args: Cli) -> ExitStatus {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let input = match args.input() {
        Ok(input) => input,
        Err(e) => return usage_error(&e),
    };

    let result = args
        .into_options(input)
        .and_then(|opts| run_main::<LangJava>(&opts));

    let status = match result {
        Ok(report) => {
            if !report.is_clean() {
                eprintln!(
                    "{} of {} files failed",
                    report.failed.len(),
                    report.total()
                );
            }
            ExitStatus::Success
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            ExitStatus::from_error(&e)
        }
    };

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    status
}

pub fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            let status = if err.use_stderr() {
                ExitStatus::ArgumentParse
            } else {
                ExitStatus::Success
            };
            return status.into();
        }
    };
    run(args).into()
}
