pub mod error;
pub mod graph;
pub mod keys;
pub mod logging;
pub mod source;

pub use error::{AssetGraphError, Result};
pub use graph::{AssetGraph, NodeInfo};
pub use keys::{GraphOptions, ItemKeys};
pub use source::{load_items_file, parse_items};
