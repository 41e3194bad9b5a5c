//! Structural validation
//!
//! The format itself allows duplicate ids, edges pointing at nodes that do not
//! exist and zero-sized boxes, and [`crate::decode`] accepts all of them.
//! Callers that need those guarantees run [`validate`] or decode with
//! [`crate::DecodeOptions::strict`].

use std::collections::HashSet;
use std::fmt;

use crate::document::Canvas;

/// Which end of an edge a violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `fromNode`
    From,
    /// `toNode`
    To,
}

/// A structural problem found in a canvas
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Violation {
    /// Two or more nodes share an id
    DuplicateNodeId(String),
    /// Two or more edges share an id
    DuplicateEdgeId(String),
    /// An edge endpoint names no node
    DanglingEdge {
        /// Edge id
        edge: String,
        /// Which end dangles
        endpoint: Endpoint,
        /// The missing node id
        node: String,
    },
    /// Width or height is zero or negative
    NonPositiveSize {
        /// Node id
        node: String,
        /// Width as stored
        width: i64,
        /// Height as stored
        height: i64,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNodeId(id) => write!(f, "duplicate node id {id:?}"),
            Self::DuplicateEdgeId(id) => write!(f, "duplicate edge id {id:?}"),
            Self::DanglingEdge {
                edge,
                endpoint,
                node,
            } => {
                let field = match endpoint {
                    Endpoint::From => "fromNode",
                    Endpoint::To => "toNode",
                };
                write!(f, "edge {edge:?} {field} references unknown node {node:?}")
            }
            Self::NonPositiveSize {
                node,
                width,
                height,
            } => write!(f, "node {node:?} has non-positive size {width}x{height}"),
        }
    }
}

/// Check a canvas for duplicate ids, dangling edges and non-positive sizes
///
/// Violations are returned in document order: nodes first, then edges. Each
/// duplicated id is reported once.
#[must_use]
pub fn validate(canvas: &Canvas) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut node_ids = HashSet::new();
    let mut reported = HashSet::new();
    for node in &canvas.nodes {
        if !node_ids.insert(node.id.as_str()) && reported.insert(node.id.as_str()) {
            violations.push(Violation::DuplicateNodeId(node.id.clone()));
        }
        if node.width <= 0 || node.height <= 0 {
            violations.push(Violation::NonPositiveSize {
                node: node.id.clone(),
                width: node.width,
                height: node.height,
            });
        }
    }

    let mut edge_ids = HashSet::new();
    let mut reported = HashSet::new();
    for edge in &canvas.edges {
        if !edge_ids.insert(edge.id.as_str()) && reported.insert(edge.id.as_str()) {
            violations.push(Violation::DuplicateEdgeId(edge.id.clone()));
        }
        for (endpoint, node) in [
            (Endpoint::From, &edge.from_node),
            (Endpoint::To, &edge.to_node),
        ] {
            if !node_ids.contains(node.as_str()) {
                violations.push(Violation::DanglingEdge {
                    edge: edge.id.clone(),
                    endpoint,
                    node: node.clone(),
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;
    use crate::node::Node;

    #[test]
    fn test_valid_canvas() {
        let canvas = Canvas::new()
            .with_nodes(vec![
                Node::text("a", 0, 0, 10, 10, "A"),
                Node::text("b", 20, 0, 10, 10, "B"),
            ])
            .with_edges(vec![Edge::new("e", "a", "b")]);
        assert!(validate(&canvas).is_empty());
    }

    #[test]
    fn test_duplicates_reported_once() {
        let canvas = Canvas::new()
            .with_nodes(vec![
                Node::text("a", 0, 0, 10, 10, "1"),
                Node::text("a", 0, 0, 10, 10, "2"),
                Node::text("a", 0, 0, 10, 10, "3"),
            ])
            .with_edges(vec![Edge::new("e", "a", "a"), Edge::new("e", "a", "a")]);
        assert_eq!(
            validate(&canvas),
            vec![
                Violation::DuplicateNodeId("a".into()),
                Violation::DuplicateEdgeId("e".into()),
            ]
        );
    }

    #[test]
    fn test_dangling_edges() {
        let canvas = Canvas::new()
            .with_nodes(vec![Node::text("a", 0, 0, 10, 10, "A")])
            .with_edges(vec![Edge::new("e1", "a", "ghost")]);
        let violations = validate(&canvas);
        assert_eq!(
            violations,
            vec![Violation::DanglingEdge {
                edge: "e1".into(),
                endpoint: Endpoint::To,
                node: "ghost".into(),
            }]
        );
        assert_eq!(
            violations[0].to_string(),
            "edge \"e1\" toNode references unknown node \"ghost\""
        );
    }

    #[test]
    fn test_non_positive_size() {
        let canvas = Canvas::new().with_nodes(vec![Node::group("g", 0, 0, 0, -5)]);
        assert_eq!(
            validate(&canvas),
            vec![Violation::NonPositiveSize {
                node: "g".into(),
                width: 0,
                height: -5,
            }]
        );
    }
}
