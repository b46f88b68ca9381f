use clap::Parser;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use pta_report::cli::Args;
use pta_report::pipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    TermLogger::init(
        args.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    for (i, arg) in std::env::args().enumerate() {
        log::debug!("Argument {}: {}", i, arg);
    }

    let summary = pipeline::run(&args)?;
    if !summary.failed.is_empty() {
        log::warn!(
            "{} of {} artifact(s) could not be written",
            summary.failed.len(),
            summary.failed.len() + summary.written.len()
        );
    }
    Ok(())
}
