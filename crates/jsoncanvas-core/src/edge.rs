//! Canvas Edges
//!
//! Edges name their endpoints by node id only. Nothing here checks that those
//! nodes exist.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::color::CanvasColor;
use crate::error::UnknownVariant;

/// Wire keys of an edge, in canonical order
pub(crate) const FIELDS: &[&str] = &[
    "id", "fromNode", "toNode", "fromSide", "toSide", "fromEnd", "toEnd", "color", "label",
];

/// Side of a node an edge attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Top side
    Top,
    /// Right side
    Right,
    /// Bottom side
    Bottom,
    /// Left side
    Left,
}

impl Side {
    /// Returns the wire representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Side {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Shape drawn at an edge endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndShape {
    /// No marker
    None,
    /// Arrow head
    Arrow,
}

impl EndShape {
    /// Returns the wire representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Arrow => "arrow",
        }
    }
}

impl std::fmt::Display for EndShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EndShape {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "arrow" => Ok(Self::Arrow),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// A directed connector between two node ids
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Identifier, unique within the canvas
    pub id: String,
    /// Source node id
    pub from_node: String,
    /// Side of the source node
    pub from_side: Option<Side>,
    /// Marker at the source end
    pub from_end: Option<EndShape>,
    /// Target node id
    pub to_node: String,
    /// Side of the target node
    pub to_side: Option<Side>,
    /// Marker at the target end
    pub to_end: Option<EndShape>,
    /// Optional color
    pub color: Option<CanvasColor>,
    /// Optional label
    pub label: Option<String>,
    /// Unrecognized keys
    pub(crate) extra: Map<String, Value>,
}

impl Edge {
    /// Create an edge from `from_node` to `to_node` with an arrow at the target
    ///
    /// The arrow is only a constructor default; decoding never fills in a
    /// missing `toEnd`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        from_node: impl Into<String>,
        to_node: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            from_node: from_node.into(),
            from_side: None,
            from_end: None,
            to_node: to_node.into(),
            to_side: None,
            to_end: Some(EndShape::Arrow),
            color: None,
            label: None,
            extra: Map::new(),
        }
    }

    /// Set the source side
    #[must_use]
    pub fn with_from_side(mut self, side: Side) -> Self {
        self.from_side = Some(side);
        self
    }

    /// Set the target side
    #[must_use]
    pub fn with_to_side(mut self, side: Side) -> Self {
        self.to_side = Some(side);
        self
    }

    /// Set the source marker
    #[must_use]
    pub fn with_from_end(mut self, end: EndShape) -> Self {
        self.from_end = Some(end);
        self
    }

    /// Set the target marker
    #[must_use]
    pub fn with_to_end(mut self, end: EndShape) -> Self {
        self.to_end = Some(end);
        self
    }

    /// Leave the target marker unset
    #[must_use]
    pub fn without_to_end(mut self) -> Self {
        self.to_end = None;
        self
    }

    /// Set the color
    #[must_use]
    pub fn with_color(mut self, color: CanvasColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether the edge starts and ends on the same node
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from_node == self.to_node
    }

    /// Unrecognized keys carried through from the source document
    #[must_use]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Carry an additional key; refused (returns `false`) for edge keys
    pub fn insert_extra(&mut self, key: impl Into<String>, value: Value) -> bool {
        let key = key.into();
        if FIELDS.contains(&key.as_str()) {
            return false;
        }
        self.extra.insert(key, value);
        true
    }
}
