//! Command-line interface definitions.
//!
//! Defines the `marinetrack` CLI using `clap`: running the marine-trackings
//! query, importing datasets into the database, and checking configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Consolidated marine-shipment tracking for sales orders
#[derive(Parser, Debug)]
#[command(name = "marinetrack")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show consolidated marine tracking for authorized orders
    Query(QueryArgs),

    /// Load a JSON dataset into the database
    Import(ImportArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `marinetrack config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument for commands that only need a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `query` subcommand.
#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Locations the caller is authorized for (comma-separated).
    #[arg(long, value_delimiter = ',', required = true)]
    pub locations: Vec<String>,

    /// Restrict the result to this order (repeatable).
    #[arg(long = "order", value_name = "ORDER_ID")]
    pub orders: Vec<String>,

    /// Include preparation and in-transit activity per booking.
    #[arg(long)]
    pub recent_activity: bool,

    /// Read from a JSON dataset instead of the configured database.
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `import` subcommand.
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// JSON dataset with orders, tracking events, and shipments.
    pub dataset: PathBuf,

    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_name_and_version() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "marinetrack");
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "marinetrack",
            "query",
            "--locations",
            "ST-1",
            "--json",
            "-vv",
            "--color",
            "never",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn query_splits_locations_and_repeats_orders() {
        let cli = Cli::try_parse_from([
            "marinetrack",
            "query",
            "--locations",
            "ST-1,ST-2",
            "--order",
            "SO-1",
            "--order",
            "SO-2",
            "--recent-activity",
        ])
        .unwrap();

        let Commands::Query(args) = cli.command else {
            panic!("expected query subcommand");
        };
        assert_eq!(args.locations, vec!["ST-1", "ST-2"]);
        assert_eq!(args.orders, vec!["SO-1", "SO-2"]);
        assert!(args.recent_activity);
        assert!(args.dataset.is_none());
    }

    #[test]
    fn query_requires_locations() {
        assert!(Cli::try_parse_from(["marinetrack", "query"]).is_err());
    }

    #[test]
    fn import_takes_dataset_path() {
        let cli = Cli::try_parse_from(["marinetrack", "import", "data.json", "-c", "cfg.toml"])
            .unwrap();
        let Commands::Import(args) = cli.command else {
            panic!("expected import subcommand");
        };
        assert_eq!(args.dataset, PathBuf::from("data.json"));
        assert_eq!(args.config, PathBuf::from("cfg.toml"));
    }

    #[test]
    fn config_subcommands_default_to_home_config() {
        let cli = Cli::try_parse_from(["marinetrack", "config", "show"]).unwrap();
        let Commands::Config(ConfigCommand::Show(arg)) = cli.command else {
            panic!("expected config show");
        };
        assert_eq!(arg.config, paths::default_config());
    }
}
