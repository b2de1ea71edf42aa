use std::error::Error;
use std::path::Path;

use assetgraph_core::{AssetGraph, GraphOptions, load_items_file};
use serde_json::Value;

use crate::segment_text;

pub fn run(file: &Path, options: &GraphOptions) -> Result<(), Box<dyn Error>> {
    let items = load_items_file(file)?;
    let graph = AssetGraph::with_options(&items, options.clone())?;

    for root in graph.roots() {
        print_subtree(&graph, root, 0);
    }
    Ok(())
}

fn print_subtree(graph: &AssetGraph<'_>, node: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    let label = graph
        .node_info(node)
        .and_then(|info| info.id)
        .map(segment_text)
        .unwrap_or_else(|| "<no id>".to_string());
    let route = graph
        .route_to(node)
        .map(|segments| {
            segments
                .iter()
                .map(|s| segment_text(s))
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default();
    println!("{indent}{label}  ({route})");

    if let Some(children) = graph.children_of(node) {
        for child in children {
            print_subtree(graph, child, depth + 1);
        }
    }
}
