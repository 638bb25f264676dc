//! `marinetrack` command-line adapter.

pub mod command;
pub mod config;
pub mod import;
pub mod output;
pub mod paths;
pub mod query;

use self::command::{Cli, ColorChoice, Commands, ConfigCommand};
use self::output::OutputConfig;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    match cli.command {
        Commands::Query(args) => query::execute(&args).await,
        Commands::Import(args) => import::execute(&args),
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(&arg.config),
        Commands::Config(ConfigCommand::Validate(arg)) => config::execute_validate(&arg.config),
    }
}

/// Start logging for a command, letting `-v` and `-q` override the
/// configured level.
pub(crate) fn init_logging(config: &Config) {
    let mut logging = config.logging.clone();
    if output::is_quiet() {
        logging.level = "error".into();
    } else {
        match output::verbosity() {
            0 => {}
            1 => logging.level = "debug".into(),
            _ => logging.level = "trace".into(),
        }
    }
    logging.init();
}
