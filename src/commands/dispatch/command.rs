//! Command trait and context for dispatching commands

use std::time::{Duration, Instant};

use algotrace_core::config::TraceConfig;
use algotrace_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: TraceConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: TraceConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--delay-ms` wins over `[playback] delay_ms`
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.cli.delay_ms.unwrap_or(self.config.playback.delay_ms))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Sort(args) => commands::sort::execute(ctx, args),
            Commands::Traverse(args) => commands::traverse::execute(ctx, args),
            Commands::Dijkstra(args) => commands::dijkstra::execute(ctx, args),
            Commands::List(args) => commands::list::execute(ctx, args),
            Commands::Tree(args) => commands::tree::execute(ctx, args),
            Commands::Analysis(args) => commands::analysis::execute(ctx, args),
        }
    }
}
