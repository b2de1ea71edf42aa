use std::error::Error;
use std::path::Path;

use assetgraph_core::{AssetGraph, GraphOptions, load_items_file};
use tracing::info;

pub fn run(file: &Path, options: &GraphOptions) -> Result<(), Box<dyn Error>> {
    let items = load_items_file(file)?;
    let graph = AssetGraph::with_options(&items, options.clone())?;

    let max_depth = graph.iter().map(|i| i.depth()).max().unwrap_or(0);
    let leaves = graph.iter().filter(|i| i.children.is_empty()).count();

    info!("Items file: {}", file.display());
    info!("Nodes: {}", graph.node_count());
    info!("Roots: {}", graph.roots().len());
    info!("Leaves: {}", leaves);
    info!("Max depth: {}", max_depth);

    Ok(())
}
