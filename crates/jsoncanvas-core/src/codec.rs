//! Document Codec
//!
//! Translates between JSON Canvas bytes and [`Canvas`] values.
//!
//! Decoding walks a parsed `serde_json::Value` field by field rather than
//! deriving `Deserialize`, so that every failure can name the element and
//! field it came from. Encoding goes through hand-written `Serialize` impls
//! that emit keys in a fixed order:
//!
//! - node: `id`, `type`, `x`, `y`, `width`, `height`, `color`, then the kind
//!   fields (`text` | `file`, `subpath` | `url` | `label`, `background`,
//!   `backgroundStyle`), then any carried-through keys
//! - edge: `id`, `fromNode`, `toNode`, `fromSide`, `toSide`, `fromEnd`,
//!   `toEnd`, `color`, `label`, then any carried-through keys
//!
//! Absent optionals are omitted; `nodes` and `edges` are always written, even
//! when empty.

use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::color::{CanvasColor, ColorError};
use crate::document::Canvas;
use crate::edge::{Edge, EndShape, Side};
use crate::error::{Error, Location, Result, UnknownVariant};
use crate::node::{
    is_reserved, BackgroundStyle, FileNode, GroupNode, LinkNode, Node, NodeBody, NodeType,
    TextNode,
};
use crate::validate::validate;

/// Options for [`decode_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject canvases with duplicate ids, dangling edge endpoints or
    /// non-positive sizes
    pub strict: bool,
}

impl DecodeOptions {
    /// Permissive decoding (the default)
    #[must_use]
    pub fn permissive() -> Self {
        Self { strict: false }
    }

    /// Decoding followed by structural validation
    #[must_use]
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Decode a canvas document
pub fn decode(bytes: &[u8]) -> Result<Canvas> {
    decode_with(bytes, DecodeOptions::default())
}

/// Decode a canvas document from a string
pub fn decode_str(input: &str) -> Result<Canvas> {
    decode(input.as_bytes())
}

/// Decode a canvas document with explicit options
pub fn decode_with(bytes: &[u8], options: DecodeOptions) -> Result<Canvas> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| Error::malformed(e.to_string()))?;
    let canvas = from_value(value)?;

    if options.strict {
        let violations = validate(&canvas);
        if !violations.is_empty() {
            return Err(Error::Validation(violations));
        }
    }

    debug!(
        nodes = canvas.node_count(),
        edges = canvas.edge_count(),
        strict = options.strict,
        "Decoded canvas"
    );
    Ok(canvas)
}

/// Build a canvas from an already parsed JSON value
pub fn from_value(value: Value) -> Result<Canvas> {
    let Value::Object(mut root) = value else {
        return Err(Error::InvalidFieldType {
            location: Location::canvas(),
            field: "document",
            expected: "an object",
        });
    };

    let nodes = take_array(&mut root, "nodes")?
        .into_iter()
        .enumerate()
        .map(|(index, value)| decode_node(index, value))
        .collect::<Result<Vec<_>>>()?;
    let edges = take_array(&mut root, "edges")?
        .into_iter()
        .enumerate()
        .map(|(index, value)| decode_edge(index, value))
        .collect::<Result<Vec<_>>>()?;

    if !root.is_empty() {
        debug!(keys = ?root.keys().collect::<Vec<_>>(), "Ignoring unknown top-level keys");
    }

    Ok(Canvas { nodes, edges })
}

/// Encode a canvas as compact JSON
pub fn encode(canvas: &Canvas) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec(canvas).map_err(|e| Error::encode(e.to_string()))?;
    log_encoded(canvas, bytes.len());
    Ok(bytes)
}

/// Encode a canvas as two-space indented JSON
pub fn encode_pretty(canvas: &Canvas) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec_pretty(canvas).map_err(|e| Error::encode(e.to_string()))?;
    log_encoded(canvas, bytes.len());
    Ok(bytes)
}

/// Encode a canvas as a compact JSON string
pub fn encode_to_string(canvas: &Canvas) -> Result<String> {
    String::from_utf8(encode(canvas)?).map_err(|e| Error::encode(e.to_string()))
}

fn log_encoded(canvas: &Canvas, len: usize) {
    debug!(
        nodes = canvas.node_count(),
        edges = canvas.edge_count(),
        bytes = len,
        "Encoded canvas"
    );
}

fn take_array(root: &mut Map<String, Value>, field: &'static str) -> Result<Vec<Value>> {
    match root.remove(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(Error::InvalidFieldType {
            location: Location::canvas(),
            field,
            expected: "an array",
        }),
    }
}

fn decode_node(index: usize, value: Value) -> Result<Node> {
    let mut fields = Fields::new(value, Location::node(index), "nodes")?;

    let id = fields.required_string("id")?;
    fields.location = fields.location.clone().with_id(&id);
    let node_type: NodeType = fields.required_enum("type")?;

    let x = fields.required_int("x")?;
    let y = fields.required_int("y")?;
    let width = fields.required_int("width")?;
    let height = fields.required_int("height")?;
    let color = fields.optional_color("color")?;

    let body = match node_type {
        NodeType::Text => NodeBody::Text(TextNode {
            text: fields.required_string("text")?,
        }),
        NodeType::File => NodeBody::File(FileNode {
            file: fields.required_string("file")?,
            subpath: fields.optional_string("subpath")?,
        }),
        NodeType::Link => NodeBody::Link(LinkNode {
            url: fields.required_string("url")?,
        }),
        NodeType::Group => NodeBody::Group(GroupNode {
            label: fields.optional_string("label")?,
            background: fields.optional_string("background")?,
            background_style: fields.optional_enum::<BackgroundStyle>("backgroundStyle")?,
        }),
    };

    Ok(Node {
        id,
        x,
        y,
        width,
        height,
        color,
        body,
        extra: fields.into_extra(),
    })
}

fn decode_edge(index: usize, value: Value) -> Result<Edge> {
    let mut fields = Fields::new(value, Location::edge(index), "edges")?;

    let id = fields.required_string("id")?;
    fields.location = fields.location.clone().with_id(&id);

    let from_node = fields.required_string("fromNode")?;
    let to_node = fields.required_string("toNode")?;
    let from_side = fields.optional_enum::<Side>("fromSide")?;
    let to_side = fields.optional_enum::<Side>("toSide")?;
    let from_end = fields.optional_enum::<EndShape>("fromEnd")?;
    let to_end = fields.optional_enum::<EndShape>("toEnd")?;
    let color = fields.optional_color("color")?;
    let label = fields.optional_string("label")?;

    Ok(Edge {
        id,
        from_node,
        from_side,
        from_end,
        to_node,
        to_side,
        to_end,
        color,
        label,
        extra: fields.into_extra(),
    })
}

/// Consumes the fields of one node or edge object
///
/// Whatever has not been taken when decoding finishes is carried on the
/// entity as extra keys. A JSON `null` reads as absent.
struct Fields {
    map: Map<String, Value>,
    location: Location,
}

impl Fields {
    fn new(value: Value, location: Location, list: &'static str) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { map, location }),
            _ => Err(Error::InvalidFieldType {
                location,
                field: list,
                expected: "an array of objects",
            }),
        }
    }

    fn take(&mut self, field: &str) -> Option<Value> {
        match self.map.remove(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn missing(&self, field: &'static str) -> Error {
        Error::MissingRequiredField {
            location: self.location.clone(),
            field,
        }
    }

    fn wrong_type(&self, field: &'static str, expected: &'static str) -> Error {
        Error::InvalidFieldType {
            location: self.location.clone(),
            field,
            expected,
        }
    }

    fn optional_string(&mut self, field: &'static str) -> Result<Option<String>> {
        match self.take(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(self.wrong_type(field, "a string")),
        }
    }

    fn required_string(&mut self, field: &'static str) -> Result<String> {
        self.optional_string(field)?
            .ok_or_else(|| self.missing(field))
    }

    fn required_int(&mut self, field: &'static str) -> Result<i64> {
        match self.take(field) {
            None => Err(self.missing(field)),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(integral))
                .ok_or_else(|| self.wrong_type(field, "an integer")),
            Some(_) => Err(self.wrong_type(field, "an integer")),
        }
    }

    fn optional_enum<T>(&mut self, field: &'static str) -> Result<Option<T>>
    where
        T: FromStr<Err = UnknownVariant>,
    {
        self.optional_string(field)?
            .map(|raw| {
                raw.parse::<T>().map_err(|UnknownVariant(value)| Error::UnknownEnumValue {
                    location: self.location.clone(),
                    field,
                    value,
                })
            })
            .transpose()
    }

    fn required_enum<T>(&mut self, field: &'static str) -> Result<T>
    where
        T: FromStr<Err = UnknownVariant>,
    {
        self.optional_enum(field)?
            .ok_or_else(|| self.missing(field))
    }

    fn optional_color(&mut self, field: &'static str) -> Result<Option<CanvasColor>> {
        self.optional_string(field)?
            .map(|raw| {
                CanvasColor::decode(&raw).map_err(|err| match err {
                    ColorError::InvalidFormat(value) => Error::InvalidColorFormat {
                        location: self.location.clone(),
                        field,
                        value,
                    },
                    ColorError::InvalidValue(value) => Error::InvalidColorValue {
                        location: self.location.clone(),
                        field,
                        value,
                    },
                })
            })
            .transpose()
    }

    fn into_extra(self) -> Map<String, Value> {
        if !self.map.is_empty() {
            trace!(
                location = %self.location,
                keys = ?self.map.keys().collect::<Vec<_>>(),
                "Preserving extraneous fields"
            );
        }
        self.map
    }
}

/// Whole-valued float within `i64` range, e.g. `10.0`
fn integral(n: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    (n.is_finite() && n.fract() == 0.0 && (-LIMIT..LIMIT).contains(&n)).then_some(n as i64)
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("type", &self.node_type())?;
        map.serialize_entry("x", &self.x)?;
        map.serialize_entry("y", &self.y)?;
        map.serialize_entry("width", &self.width)?;
        map.serialize_entry("height", &self.height)?;
        if let Some(color) = &self.color {
            map.serialize_entry("color", color)?;
        }
        match &self.body {
            NodeBody::Text(body) => {
                map.serialize_entry("text", &body.text)?;
            }
            NodeBody::File(body) => {
                map.serialize_entry("file", &body.file)?;
                if let Some(subpath) = &body.subpath {
                    map.serialize_entry("subpath", subpath)?;
                }
            }
            NodeBody::Link(body) => {
                map.serialize_entry("url", &body.url)?;
            }
            NodeBody::Group(body) => {
                if let Some(label) = &body.label {
                    map.serialize_entry("label", label)?;
                }
                if let Some(background) = &body.background {
                    map.serialize_entry("background", background)?;
                }
                if let Some(style) = &body.background_style {
                    map.serialize_entry("backgroundStyle", style)?;
                }
            }
        }
        let node_type = self.node_type();
        for (key, value) in &self.extra {
            if !is_reserved(node_type, key) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl Serialize for Edge {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("fromNode", &self.from_node)?;
        map.serialize_entry("toNode", &self.to_node)?;
        if let Some(side) = &self.from_side {
            map.serialize_entry("fromSide", side)?;
        }
        if let Some(side) = &self.to_side {
            map.serialize_entry("toSide", side)?;
        }
        if let Some(end) = &self.from_end {
            map.serialize_entry("fromEnd", end)?;
        }
        if let Some(end) = &self.to_end {
            map.serialize_entry("toEnd", end)?;
        }
        if let Some(color) = &self.color {
            map.serialize_entry("color", color)?;
        }
        if let Some(label) = &self.label {
            map.serialize_entry("label", label)?;
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Canvas {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("nodes", &self.nodes)?;
        map.serialize_entry("edges", &self.edges)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Canvas {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_value(value).map_err(serde::de::Error::custom)
    }
}
