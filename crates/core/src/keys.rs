use serde::{Deserialize, Serialize};

use crate::error::{AssetGraphError, Result};

/// Names of the item properties the graph reads to find each node's unique
/// id, child list, and route segment.
///
/// Callers with a predefined data schema can override these to match their
/// schema instead of reshaping their data. For example:
///
/// ```
/// use assetgraph_core::ItemKeys;
///
/// let keys = ItemKeys::new("assetId", "subAssets", "assetRoute");
/// assert_eq!(keys.id, "assetId");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemKeys {
    /// Property holding a unique id for the item. Default: `"id"`.
    pub id: String,
    /// Property holding an ordered array of child items. Default: `"children"`.
    pub children: String,
    /// Property holding the item's route segment. Falls back to the id
    /// property when absent. Default: `"route"`.
    pub route: String,
}

impl Default for ItemKeys {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            children: "children".to_string(),
            route: "route".to_string(),
        }
    }
}

impl ItemKeys {
    pub fn new(
        id: impl Into<String>,
        children: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            children: children.into(),
            route: route.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("id", &self.id),
            ("children", &self.children),
            ("route", &self.route),
        ] {
            if value.is_empty() {
                return Err(AssetGraphError::InvalidKeys(format!(
                    "the '{name}' key name must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Construction options for [`AssetGraph`](crate::AssetGraph).
#[derive(Debug, Clone, Default)]
pub struct GraphOptions {
    pub keys: ItemKeys,
    /// Log recoverable issues found while indexing (e.g. duplicate unique
    /// ids) on the `tracing` warn channel.
    pub enable_warnings: bool,
}
