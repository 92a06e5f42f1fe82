use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "devhub")]
#[command(about = "DevHub palette and reorder probe", version)]
pub struct Cli {
    /// JSON file with `palette` and `drag` sections.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Absolute directory for rolling log files. Logging is off when absent.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
    /// Log level; defaults to the build-mode level.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Ping,
    Search(SearchArgs),
    Palette(PaletteArgs),
    Reorder(ReorderArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(allow_hyphen_values = true, default_value = "")]
    pub query: String,
    /// Print scored matches instead of display groups.
    #[arg(long, default_value_t = false)]
    pub scores: bool,
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct PaletteArgs {
    /// Query typed after opening.
    #[arg(long, allow_hyphen_values = true, default_value = "")]
    pub query: String,
    /// Key strokes fed after the query, e.g. `down,down,enter`.
    #[arg(long, value_delimiter = ',')]
    pub keys: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ReorderArgs {
    /// Comma-separated item keys in current order.
    #[arg(long, value_delimiter = ',', required = true)]
    pub items: Vec<String>,
    #[arg(long)]
    pub from: String,
    #[arg(long)]
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_keys_split_on_commas() {
        let cli = Cli::try_parse_from([
            "devhub", "palette", "--query", "tech", "--keys", "down,down,enter",
        ])
        .expect("parse");
        match cli.command {
            Commands::Palette(PaletteArgs { query, keys }) => {
                assert_eq!(query, "tech");
                assert_eq!(keys, vec!["down", "down", "enter"]);
            }
            _ => panic!("expected palette command"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["devhub", "search", "techcop", "--log-level", "debug"])
            .expect("parse");
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Commands::Search(_)));
    }

    #[test]
    fn reorder_requires_items() {
        let parsed = Cli::try_parse_from(["devhub", "reorder", "--from", "a", "--to", "b"]);
        assert!(parsed.is_err(), "missing --items must be rejected");
    }
}
