use std::collections::VecDeque;
use std::error::Error;
use std::path::Path;

use assetgraph_core::{AssetGraph, GraphOptions, load_items_file};
use serde_json::Value;

use crate::segment_text;

pub fn run(file: &Path, id: &str, options: &GraphOptions) -> Result<(), Box<dyn Error>> {
    let items = load_items_file(file)?;
    let graph = AssetGraph::with_options(&items, options.clone())?;

    match find_by_id(&graph, id) {
        Some(node) => {
            let route = graph.route_to(node).unwrap_or_default();
            println!(
                "{}",
                route
                    .iter()
                    .map(|s| segment_text(s))
                    .collect::<Vec<_>>()
                    .join("/")
            );
            Ok(())
        }
        None => Err(format!("no item with id '{id}'").into()),
    }
}

/// Breadth-first scan in sibling order, so a duplicated id resolves to its
/// first occurrence.
fn find_by_id<'a>(graph: &AssetGraph<'a>, id: &str) -> Option<&'a Value> {
    let mut queue: VecDeque<&'a Value> = graph.roots().iter().collect();
    while let Some(node) = queue.pop_front() {
        let Some(info) = graph.node_info(node) else {
            continue;
        };
        if info.id.is_some_and(|v| segment_text(v) == id) {
            return Some(node);
        }
        queue.extend(info.children.iter());
    }
    None
}
