//! JSON Canvas core
//!
//! Data model and codec for JSON Canvas documents (`.canvas` files):
//! - Color: hex / preset color values and their string encoding
//! - Node: positioned boxes of kind text, file, link or group
//! - Edge: directed connectors between node ids
//! - Document: the canvas root holding nodes and edges
//! - Codec: whole-document decode and encode
//! - Validate: optional structural checks (duplicate ids, dangling edges)
//! - Error: decode errors with element and field context
//!
//! ## Usage
//!
//! ```
//! use jsoncanvas_core::{decode, encode, CanvasColor};
//!
//! let input = br#"{"nodes":[{"id":"1","type":"text","x":10,"y":20,
//!     "width":100,"height":50,"color":"1","text":"Hello"}],"edges":[]}"#;
//! let canvas = decode(input).unwrap();
//! assert_eq!(canvas.nodes[0].text_content(), Some("Hello"));
//! assert_eq!(canvas.nodes[0].color, Some(CanvasColor::preset(1).unwrap()));
//!
//! let bytes = encode(&canvas).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), canvas);
//! ```
//!
//! Decoding does not touch the filesystem or the network, and never checks that
//! edge endpoints exist. Whole documents only: there is no partial result.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
pub mod color;
pub mod document;
pub mod edge;
pub mod error;
pub mod node;
pub mod validate;

// Re-export main types
pub use codec::{
    decode, decode_str, decode_with, encode, encode_pretty, encode_to_string, from_value,
    DecodeOptions,
};
pub use color::{decode_color, encode_color, CanvasColor, ColorError, HexColor, PresetColor};
pub use document::Canvas;
pub use edge::{Edge, EndShape, Side};
pub use error::{Entity, Error, Location, Result, UnknownVariant};
pub use node::{
    BackgroundStyle, FileNode, GroupNode, LinkNode, Node, NodeBody, NodeType, TextNode,
};
pub use validate::{validate, Endpoint, Violation};
