//! Canvas Document
//!
//! The document root: an ordered list of nodes and an ordered list of edges.
//! Order is display order and is preserved through decode and encode.

use crate::edge::Edge;
use crate::node::Node;

/// A node-and-edge diagram
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    /// Nodes in document order
    pub nodes: Vec<Node>,
    /// Edges in document order
    pub edges: Vec<Edge>,
}

impl Canvas {
    /// Create an empty canvas
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the node list
    #[must_use]
    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = nodes;
        self
    }

    /// Replace the edge list
    #[must_use]
    pub fn with_edges(mut self, edges: Vec<Edge>) -> Self {
        self.edges = edges;
        self
    }

    /// Append a node
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Append an edge
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// First node with the given id
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// First edge with the given id
    #[must_use]
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the canvas has neither nodes nor edges
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Edges leaving the node with the given id
    pub fn edges_from<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.from_node == node_id)
    }

    /// Edges arriving at the node with the given id
    pub fn edges_to<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.to_node == node_id)
    }

    /// Resolve both ends of an edge; `None` marks an id with no node
    #[must_use]
    pub fn endpoints(&self, edge: &Edge) -> (Option<&Node>, Option<&Node>) {
        (self.node(&edge.from_node), self.node(&edge.to_node))
    }

    /// Move the first node with the given id by an offset
    ///
    /// Returns `false` when no node has that id.
    pub fn move_node(&mut self, id: &str, dx: i64, dy: i64) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.translate(dx, dy);
                true
            }
            None => false,
        }
    }
}
