use std::error::Error;
use std::path::Path;

use assetgraph_core::{AssetGraph, GraphOptions, load_items_file};
use serde_json::Value;

pub fn run(file: &Path, route: &str, options: &GraphOptions) -> Result<(), Box<dyn Error>> {
    let items = load_items_file(file)?;
    let graph = AssetGraph::with_options(&items, options.clone())?;

    let segments: Vec<Value> = route
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| Value::String(s.to_string()))
        .collect();
    let segment_refs: Vec<&Value> = segments.iter().collect();

    match graph.node_at_route(&segment_refs) {
        Some(node) => {
            println!("{}", serde_json::to_string_pretty(node)?);
            Ok(())
        }
        None => Err(format!("no item found at route '{route}'").into()),
    }
}
