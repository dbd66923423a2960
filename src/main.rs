use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    radio_console_lib::cli::run(radio_console_lib::cli::Cli::parse())
}
