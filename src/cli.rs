//! CLI argument definitions.
//!
//! The first positional is the analysis mode flag, passed through verbatim
//! (it usually starts with `-`). The remaining positionals are input modules.

use clap::{ArgAction, Parser};
use simplelog::LevelFilter;
use std::path::PathBuf;

use crate::config::{ConfigFile, Settings};
use crate::output::ReportFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Whole-program points-to analysis reports", long_about = None)]
#[command(after_help = "\
Examples:
  pta_report -ander bench/llvm/foo.ll                     # points-to + arguments-comparison reports
  pta_report -brief-constraint-graph bench/O2/foo.bc      # call-graph dump
  pta_report --format structured -ander a.ll bench/xyz/b.ll")]
pub struct Args {
    /// Mode flag; the call-graph flag dumps the call graph, any other value writes the reports
    #[arg(allow_hyphen_values = true, value_name = "MODE")]
    pub mode: String,

    /// Input modules; the last one determines the report names
    #[arg(required = true, value_name = "MODULES")]
    pub modules: Vec<PathBuf>,

    /// Directory reports are written to [default: /app/output/reports/]
    #[arg(long, value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Encoding of the points-to report [default: flat]
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// List every points-to set member in the flat encoding
    #[arg(long, default_value_t = false)]
    pub list_members: bool,

    /// Configuration file [default: ./.pta_report.json if present]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Module whose path names the reports.
    pub fn naming_module(&self) -> &PathBuf {
        // `modules` is required, so there is always a last one
        &self.modules[self.modules.len() - 1]
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Layer command-line values over the loaded configuration.
    pub fn settings(&self, config: ConfigFile) -> Settings {
        let mut settings = Settings::from_config(config);
        if let Some(dir) = &self.report_dir {
            settings.report_dir = dir.clone();
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if self.list_members {
            settings.list_members = true;
        }
        settings
    }
}
