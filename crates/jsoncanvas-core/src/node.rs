//! Canvas Nodes
//!
//! A node is a positioned, sized box. Every node shares an identity and
//! geometry record; what it displays depends on its kind and lives in
//! [`NodeBody`], so a text node can never carry a URL and a link node can never
//! lose it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::color::CanvasColor;
use crate::error::UnknownVariant;

/// Wire keys shared by every node kind
pub(crate) const COMMON_FIELDS: &[&str] = &["id", "type", "x", "y", "width", "height", "color"];

/// Node kind tag (`type` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Plain text / markdown body
    Text,
    /// Reference to a file in the vault
    File,
    /// External URL
    Link,
    /// Visual container for other nodes
    Group,
}

impl NodeType {
    /// Returns the wire representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::File => "file",
            Self::Link => "link",
            Self::Group => "group",
        }
    }

    /// Kind-specific wire keys, in canonical order
    #[must_use]
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::Text => &["text"],
            Self::File => &["file", "subpath"],
            Self::Link => &["url"],
            Self::Group => &["label", "background", "backgroundStyle"],
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NodeType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "file" => Ok(Self::File),
            "link" => Ok(Self::Link),
            "group" => Ok(Self::Group),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// How a group's background image is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    /// Fill the group, cropping as needed
    Cover,
    /// Keep the image aspect ratio
    Ratio,
    /// Tile the image
    Repeat,
}

impl BackgroundStyle {
    /// Returns the wire representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Ratio => "ratio",
            Self::Repeat => "repeat",
        }
    }
}

impl std::fmt::Display for BackgroundStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BackgroundStyle {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cover" => Ok(Self::Cover),
            "ratio" => Ok(Self::Ratio),
            "repeat" => Ok(Self::Repeat),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Body of a text node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    /// Text content
    pub text: String,
}

/// Body of a file node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    /// Path of the referenced file
    pub file: String,
    /// Heading or block inside the file
    pub subpath: Option<String>,
}

/// Body of a link node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkNode {
    /// Target URL
    pub url: String,
}

/// Body of a group node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupNode {
    /// Group title
    pub label: Option<String>,
    /// Background image reference
    pub background: Option<String>,
    /// Background display mode
    pub background_style: Option<BackgroundStyle>,
}

/// Kind-specific content of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    /// Text node
    Text(TextNode),
    /// File node
    File(FileNode),
    /// Link node
    Link(LinkNode),
    /// Group node
    Group(GroupNode),
}

impl NodeBody {
    /// Kind tag of this body
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Text(_) => NodeType::Text,
            Self::File(_) => NodeType::File,
            Self::Link(_) => NodeType::Link,
            Self::Group(_) => NodeType::Group,
        }
    }
}

impl From<TextNode> for NodeBody {
    fn from(body: TextNode) -> Self {
        Self::Text(body)
    }
}

impl From<FileNode> for NodeBody {
    fn from(body: FileNode) -> Self {
        Self::File(body)
    }
}

impl From<LinkNode> for NodeBody {
    fn from(body: LinkNode) -> Self {
        Self::Link(body)
    }
}

impl From<GroupNode> for NodeBody {
    fn from(body: GroupNode) -> Self {
        Self::Group(body)
    }
}

/// A positioned element of a canvas
///
/// Width and height are expected to be positive and ids unique within a
/// canvas, but neither is checked here; see [`crate::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Identifier, unique within the canvas
    pub id: String,
    /// Left edge
    pub x: i64,
    /// Top edge
    pub y: i64,
    /// Width in canvas units
    pub width: i64,
    /// Height in canvas units
    pub height: i64,
    /// Optional color
    pub color: Option<CanvasColor>,
    /// Kind-specific content
    pub(crate) body: NodeBody,
    /// Keys not consumed for this node's kind
    pub(crate) extra: Map<String, Value>,
}

impl Node {
    /// Create a node from its geometry and body
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        body: impl Into<NodeBody>,
    ) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
            color: None,
            body: body.into(),
            extra: Map::new(),
        }
    }

    /// Create a text node
    #[must_use]
    pub fn text(
        id: impl Into<String>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        text: impl Into<String>,
    ) -> Self {
        Self::new(id, x, y, width, height, TextNode { text: text.into() })
    }

    /// Create a file node
    #[must_use]
    pub fn file(
        id: impl Into<String>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        file: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            x,
            y,
            width,
            height,
            FileNode {
                file: file.into(),
                subpath: None,
            },
        )
    }

    /// Create a link node
    #[must_use]
    pub fn link(
        id: impl Into<String>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        url: impl Into<String>,
    ) -> Self {
        Self::new(id, x, y, width, height, LinkNode { url: url.into() })
    }

    /// Create an empty group node
    #[must_use]
    pub fn group(id: impl Into<String>, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self::new(id, x, y, width, height, GroupNode::default())
    }

    /// Set the color
    #[must_use]
    pub fn with_color(mut self, color: CanvasColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the subpath of a file node; other kinds are returned unchanged
    #[must_use]
    pub fn with_subpath(mut self, subpath: impl Into<String>) -> Self {
        if let NodeBody::File(file) = &mut self.body {
            file.subpath = Some(subpath.into());
        }
        self
    }

    /// Set the label of a group node; other kinds are returned unchanged
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        if let NodeBody::Group(group) = &mut self.body {
            group.label = Some(label.into());
        }
        self
    }

    /// Set the background of a group node; other kinds are returned unchanged
    #[must_use]
    pub fn with_background(
        mut self,
        background: impl Into<String>,
        style: Option<BackgroundStyle>,
    ) -> Self {
        if let NodeBody::Group(group) = &mut self.body {
            group.background = Some(background.into());
            group.background_style = style;
        }
        self
    }

    /// Kind tag
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        self.body.node_type()
    }

    /// Text of a text node
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        match &self.body {
            NodeBody::Text(body) => Some(&body.text),
            _ => None,
        }
    }

    /// Path of a file node
    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        match &self.body {
            NodeBody::File(body) => Some(&body.file),
            _ => None,
        }
    }

    /// Subpath of a file node
    #[must_use]
    pub fn subpath(&self) -> Option<&str> {
        match &self.body {
            NodeBody::File(body) => body.subpath.as_deref(),
            _ => None,
        }
    }

    /// URL of a link node
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match &self.body {
            NodeBody::Link(body) => Some(&body.url),
            _ => None,
        }
    }

    /// Label of a group node
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match &self.body {
            NodeBody::Group(body) => body.label.as_deref(),
            _ => None,
        }
    }

    /// Background of a group node
    #[must_use]
    pub fn background(&self) -> Option<&str> {
        match &self.body {
            NodeBody::Group(body) => body.background.as_deref(),
            _ => None,
        }
    }

    /// Background style of a group node
    #[must_use]
    pub fn background_style(&self) -> Option<BackgroundStyle> {
        match &self.body {
            NodeBody::Group(body) => body.background_style,
            _ => None,
        }
    }

    /// Kind-specific content
    #[must_use]
    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    /// Replace the kind-specific content
    ///
    /// Extra keys that the new kind writes itself are dropped.
    pub fn set_body(&mut self, body: impl Into<NodeBody>) {
        self.body = body.into();
        let node_type = self.node_type();
        self.extra.retain(|key, _| !is_reserved(node_type, key));
    }

    /// Keys carried through from the source document that this kind does not use
    #[must_use]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Carry an additional key; refused (returns `false`) for keys this node
    /// already writes itself
    pub fn insert_extra(&mut self, key: impl Into<String>, value: Value) -> bool {
        let key = key.into();
        if is_reserved(self.node_type(), &key) {
            return false;
        }
        self.extra.insert(key, value);
        true
    }

    /// Move the node by the given offset
    pub fn translate(&mut self, dx: i64, dy: i64) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }
}

pub(crate) fn is_reserved(node_type: NodeType, key: &str) -> bool {
    COMMON_FIELDS.contains(&key) || node_type.fields().contains(&key)
}
