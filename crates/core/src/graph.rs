use std::collections::{HashMap, VecDeque};

use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::keys::{GraphOptions, ItemKeys};

static NULL: Value = Value::Null;

/// Everything the graph knows about a single indexed node.
#[derive(Debug, Clone)]
pub struct NodeInfo<'a> {
    /// The original item this info was derived from.
    pub node: &'a Value,
    /// Parent item, `None` for root items.
    pub parent: Option<&'a Value>,
    /// Direct children, empty for leaves.
    pub children: &'a [Value],
    /// Value at the id key, if the item declares one.
    pub id: Option<&'a Value>,
    /// Items from a root down to and including this one.
    pub path: Vec<&'a Value>,
    /// Route segments from a root down to and including this one.
    pub route: Vec<&'a Value>,
    /// The sequence this item belongs to, including the item itself.
    pub siblings: &'a [Value],
}

impl NodeInfo<'_> {
    /// Depth below the root level. Root items have depth 0.
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }
}

/// Identity key for a node: the address of its `Value` inside the borrowed
/// forest. Two items are the same node only if they are the same allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeKey(usize);

impl NodeKey {
    fn of(node: &Value) -> Self {
        NodeKey(node as *const Value as usize)
    }
}

struct QueueEntry<'a> {
    node: &'a Value,
    parent: Option<&'a Value>,
    path: Vec<&'a Value>,
    route: Vec<&'a Value>,
    siblings: &'a [Value],
}

/// An index over a caller-owned forest of hierarchical items.
///
/// The graph borrows the forest, walks it breadth-first once at construction,
/// and afterwards answers structural lookups (parent, children, siblings,
/// path, route) in O(1), keyed by node identity. It never copies or mutates
/// the items; because it holds a shared borrow for its whole lifetime, the
/// forest cannot change underneath it. To reflect structural changes, rebuild
/// the graph from the updated forest.
#[derive(Debug)]
pub struct AssetGraph<'a> {
    roots: &'a [Value],
    keys: ItemKeys,
    enable_warnings: bool,
    index: HashMap<NodeKey, NodeInfo<'a>>,
}

impl<'a> AssetGraph<'a> {
    /// Indexes `items` using the default key names (`id`, `children`,
    /// `route`).
    pub fn new(items: &'a [Value]) -> Self {
        Self::build(items, GraphOptions::default())
    }

    /// Indexes `items` with custom key names and diagnostics settings.
    ///
    /// Fails only on invalid configuration (an empty key name); malformed
    /// items never fail, they degrade to leaves.
    pub fn with_options(items: &'a [Value], options: GraphOptions) -> Result<Self> {
        options.keys.validate()?;
        Ok(Self::build(items, options))
    }

    fn build(items: &'a [Value], options: GraphOptions) -> Self {
        let mut graph = AssetGraph {
            roots: items,
            keys: options.keys,
            enable_warnings: options.enable_warnings,
            index: HashMap::new(),
        };
        graph.trace_nodes();
        graph
    }

    fn trace_nodes(&mut self) {
        let roots = self.roots;
        let mut queue: VecDeque<QueueEntry<'a>> = roots
            .iter()
            .map(|node| QueueEntry {
                node,
                parent: None,
                path: vec![node],
                route: vec![self.route_segment(node)],
                siblings: roots,
            })
            .collect();
        let mut seen_ids: Vec<&'a Value> = Vec::new();

        while let Some(entry) = queue.pop_front() {
            let QueueEntry {
                node,
                parent,
                path,
                route,
                siblings,
            } = entry;
            let id = node.get(&self.keys.id);

            if self.enable_warnings {
                if let Some(id) = id {
                    if seen_ids.contains(&id) {
                        warn!(
                            %id,
                            "duplicate unique id found while indexing; a unique id should \
                             identify exactly one item in the graph"
                        );
                    }
                    seen_ids.push(id);
                }
            }

            let children = child_items(node, &self.keys.children);
            for child in children {
                let mut child_path = path.clone();
                child_path.push(child);
                let mut child_route = route.clone();
                child_route.push(self.route_segment(child));
                queue.push_back(QueueEntry {
                    node: child,
                    parent: Some(node),
                    path: child_path,
                    route: child_route,
                    siblings: children,
                });
            }

            // First occurrence wins; later visits of the same key never
            // overwrite the recorded ancestry.
            self.index.entry(NodeKey::of(node)).or_insert(NodeInfo {
                node,
                parent,
                children,
                id,
                path,
                route,
                siblings,
            });
        }
    }

    /// The route segment for a single item: the value at the route key, or
    /// the value at the id key when no route is declared.
    fn route_segment(&self, node: &'a Value) -> &'a Value {
        node.get(&self.keys.route)
            .or_else(|| node.get(&self.keys.id))
            .unwrap_or(&NULL)
    }

    /// The full info record for `node`, or `None` if `node` is not in the
    /// graph.
    pub fn node_info(&self, node: &Value) -> Option<&NodeInfo<'a>> {
        self.index.get(&NodeKey::of(node))
    }

    /// Whether `node` was indexed from this graph's forest.
    pub fn has_node(&self, node: &Value) -> bool {
        self.index.contains_key(&NodeKey::of(node))
    }

    /// Items from a root down to and including `node`.
    pub fn path_to(&self, node: &Value) -> Option<Vec<&'a Value>> {
        self.node_info(node).map(|info| info.path.clone())
    }

    /// Route segments from a root down to and including `node`.
    pub fn route_to(&self, node: &Value) -> Option<Vec<&'a Value>> {
        self.node_info(node).map(|info| info.route.clone())
    }

    /// The parent of `node`. `Some(None)` means `node` is a root item;
    /// `None` means `node` is not in the graph.
    pub fn parent_of(&self, node: &Value) -> Option<Option<&'a Value>> {
        self.node_info(node).map(|info| info.parent)
    }

    /// The direct children of `node`, empty for leaves.
    pub fn children_of(&self, node: &Value) -> Option<&'a [Value]> {
        self.node_info(node).map(|info| info.children)
    }

    /// The sequence `node` belongs to, including `node` itself.
    pub fn siblings_of(&self, node: &Value) -> Option<&'a [Value]> {
        self.node_info(node).map(|info| info.siblings)
    }

    /// Finds the item addressed by `route` (root-to-leaf segment order, as
    /// returned by [`route_to`](Self::route_to)).
    ///
    /// Walks top-down from the roots, matching each segment against the
    /// route-or-id value of the candidates in sibling order; the first match
    /// wins. Descends into a matching item's children only while segments
    /// remain. This is a fresh scan, O(depth × branching factor), and does
    /// not touch the identity index.
    pub fn node_at_route(&self, route: &[&Value]) -> Option<&'a Value> {
        if route.is_empty() {
            return None;
        }
        let mut search = route;
        let mut items = self.roots;
        let mut i = 0;

        while i < items.len() {
            let item = &items[i];
            i += 1;
            if self.route_segment(item) != search[0] {
                continue;
            }
            if search.len() == 1 {
                return Some(item);
            }
            let children = child_items(item, &self.keys.children);
            if !children.is_empty() {
                search = &search[1..];
                items = children;
                i = 0;
            }
        }
        None
    }

    /// The root-level items this graph was built over.
    pub fn roots(&self) -> &'a [Value] {
        self.roots
    }

    /// The key configuration resolved at construction.
    pub fn keys(&self) -> &ItemKeys {
        &self.keys
    }

    /// Number of indexed nodes across the whole forest.
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterates over all indexed node infos, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeInfo<'a>> {
        self.index.values()
    }
}

fn child_items<'a>(node: &'a Value, key: &str) -> &'a [Value] {
    match node.get(key) {
        Some(Value::Array(children)) => children.as_slice(),
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_forest() {
        let items: Vec<Value> = vec![];
        let graph = AssetGraph::new(&items);
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.node_at_route(&[&json!("anything")]), None);
    }

    #[test]
    fn route_segment_prefers_route_key_over_id() {
        let items = vec![json!({ "id": "home", "route": "start" })];
        let graph = AssetGraph::new(&items);
        let route = graph.route_to(&items[0]).unwrap();
        assert_eq!(route, vec![&json!("start")]);
    }

    #[test]
    fn route_segment_falls_back_to_id() {
        let items = vec![json!({ "id": "home" })];
        let graph = AssetGraph::new(&items);
        let route = graph.route_to(&items[0]).unwrap();
        assert_eq!(route, vec![&json!("home")]);
    }

    #[test]
    fn missing_route_and_id_yields_null_segment() {
        let items = vec![json!({ "label": "anonymous" })];
        let graph = AssetGraph::new(&items);
        let route = graph.route_to(&items[0]).unwrap();
        assert_eq!(route, vec![&Value::Null]);
    }

    #[test]
    fn non_array_children_value_is_a_leaf() {
        let items = vec![json!({ "id": "a", "children": "not-an-array" })];
        let graph = AssetGraph::new(&items);
        assert_eq!(graph.children_of(&items[0]).unwrap().len(), 0);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn explicit_null_route_counts_as_declared() {
        // Mirrors hasOwnProperty semantics: a present-but-null route key
        // takes precedence over the id fallback.
        let items = vec![json!({ "id": "a", "route": null })];
        let graph = AssetGraph::new(&items);
        let route = graph.route_to(&items[0]).unwrap();
        assert_eq!(route, vec![&Value::Null]);
    }

    #[test]
    fn empty_route_lookup_is_none() {
        let items = vec![json!({ "id": "a" })];
        let graph = AssetGraph::new(&items);
        assert_eq!(graph.node_at_route(&[]), None);
    }

    #[test]
    fn route_lookup_matches_in_sibling_order() {
        let items = vec![
            json!({ "id": "dup", "label": "first" }),
            json!({ "id": "dup", "label": "second" }),
        ];
        let graph = AssetGraph::new(&items);
        let seg = json!("dup");
        let found = graph.node_at_route(&[&seg]).unwrap();
        assert!(std::ptr::eq(found, &items[0]));
    }

    #[test]
    fn route_lookup_does_not_descend_past_leaves() {
        let items = vec![json!({ "id": "a" })];
        let graph = AssetGraph::new(&items);
        let a = json!("a");
        let b = json!("b");
        assert_eq!(graph.node_at_route(&[&a, &b]), None);
    }

    #[test]
    fn numeric_route_segments() {
        let items = vec![json!({ "id": 1, "children": [{ "id": 2 }] })];
        let graph = AssetGraph::new(&items);
        let one = json!(1);
        let two = json!(2);
        let found = graph.node_at_route(&[&one, &two]).unwrap();
        assert_eq!(found.get("id"), Some(&json!(2)));
    }
}
