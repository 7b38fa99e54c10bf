//! Command dispatch logic for algotrace

use std::env;
use std::time::Instant;

use algotrace_core::config::TraceConfig;
use algotrace_core::error::Result;
use algotrace_core::trace_time;

use crate::cli::Cli;

mod command;

pub use command::{Command, CommandContext};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let dir = env::current_dir()?;
    let config = TraceConfig::discover(cli.config.as_deref(), &dir)?;

    trace_time!(start, "load_config");

    let ctx = CommandContext::new(cli, config, start);
    cli.command.execute(&ctx)
}
