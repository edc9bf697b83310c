mod cli;
mod data;
mod error;
mod report;

use std::process::ExitCode;

use env_logger::Env;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    cli::run(&args, &mut stdout.lock())
}
