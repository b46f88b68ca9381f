//! One run of the driver, from command line to written artifacts.
//!
//! Naming is resolved before the engine is loaded so that a bad input path
//! fails fast. Everything after that is best effort per artifact.

use std::error::Error;

use crate::cli::Args;
use crate::config::ConfigFile;
use crate::engine::SnapshotLoader;
use crate::paths::{OutputMode, OutputTarget};
use crate::reports::{self, ReportOptions, RunSummary};

pub fn run(args: &Args) -> Result<RunSummary, Box<dyn Error>> {
    let config = ConfigFile::load(args.config.as_deref())?;
    let settings = args.settings(config);

    let mode = OutputMode::from_flag(&args.mode, &settings.call_graph_flag);
    let target = OutputTarget::resolve(args.naming_module(), &settings.report_dir, mode)?;
    log::debug!(
        "Report prefix '{}', suffix '{}', mode {:?}",
        target.prefix,
        target.suffix,
        target.mode
    );
    target.ensure_directory();

    let ctx = SnapshotLoader::new(&settings.export_suffix).load(&args.modules)?;

    let options = ReportOptions {
        format: settings.format,
        list_members: settings.list_members,
    };
    Ok(reports::run(&ctx, &target, options))
}
