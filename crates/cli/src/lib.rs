mod at_route;
mod info;
mod route_of;
mod tree;

use assetgraph_core::{GraphOptions, ItemKeys};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assetgraph",
    version,
    about = "Structural queries over hierarchical navigation data",
    long_about = "Assetgraph indexes a JSON forest of hierarchical items (navigation trees, \
                  asset hierarchies) and answers structural queries against it: routes, \
                  paths, parents and children."
)]
pub struct Cli {
    /// Item property that holds the unique id
    #[arg(long, global = true, default_value = "id")]
    pub id_key: String,

    /// Item property that holds the array of child items
    #[arg(long, global = true, default_value = "children")]
    pub children_key: String,

    /// Item property that holds the route segment (falls back to the id)
    #[arg(long, global = true, default_value = "route")]
    pub route_key: String,

    /// Warn about recoverable issues found while indexing (duplicate ids)
    #[arg(long, global = true)]
    pub warnings: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the indented item tree with the route of every node
    Tree {
        /// Path to a JSON file whose root is an array of items
        #[arg(value_name = "ITEMS_FILE")]
        file: PathBuf,
    },
    /// Print summary statistics for the forest
    Info {
        #[arg(value_name = "ITEMS_FILE")]
        file: PathBuf,
    },
    /// Find the item addressed by a route and print it as JSON
    AtRoute {
        #[arg(value_name = "ITEMS_FILE")]
        file: PathBuf,
        /// Slash-separated route segments, e.g. 'home/alerts/a1'
        #[arg(value_name = "ROUTE")]
        route: String,
    },
    /// Find the first item with the given id and print its route
    RouteOf {
        #[arg(value_name = "ITEMS_FILE")]
        file: PathBuf,
        #[arg(value_name = "ID")]
        id: String,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = assetgraph_core::logging::init_logging("cli", true);

    let options = GraphOptions {
        keys: ItemKeys::new(&cli.id_key, &cli.children_key, &cli.route_key),
        enable_warnings: cli.warnings,
    };

    match cli.command {
        Commands::Tree { file } => tree::run(&file, &options),
        Commands::Info { file } => info::run(&file, &options),
        Commands::AtRoute { file, route } => at_route::run(&file, &route, &options),
        Commands::RouteOf { file, id } => route_of::run(&file, &id, &options),
    }
}

/// Human-readable form of a route segment or id value: strings print
/// unquoted, everything else as JSON.
pub(crate) fn segment_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn key_flags_parse_with_defaults() {
        let cli = Cli::parse_from(["assetgraph", "info", "items.json"]);
        assert_eq!(cli.id_key, "id");
        assert_eq!(cli.children_key, "children");
        assert_eq!(cli.route_key, "route");
        assert!(!cli.warnings);
    }

    #[test]
    fn key_flags_can_be_overridden_after_the_subcommand() {
        let cli = Cli::parse_from([
            "assetgraph",
            "at-route",
            "items.json",
            "us/ca/sf",
            "--id-key",
            "assetId",
            "--warnings",
        ]);
        assert_eq!(cli.id_key, "assetId");
        assert!(cli.warnings);
        match cli.command {
            Commands::AtRoute { route, .. } => assert_eq!(route, "us/ca/sf"),
            _ => panic!("expected at-route"),
        }
    }

    #[test]
    fn segment_text_strips_string_quotes() {
        assert_eq!(segment_text(&serde_json::json!("home")), "home");
        assert_eq!(segment_text(&serde_json::json!(42)), "42");
        assert_eq!(segment_text(&serde_json::Value::Null), "null");
    }
}
