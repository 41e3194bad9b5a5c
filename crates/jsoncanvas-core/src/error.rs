//! Error types for jsoncanvas-core
//!
//! Every decode failure carries a [`Location`] naming the entity being decoded
//! (the canvas root, a node or an edge), its position in the document and its
//! id when that was already read, so callers can point users at the offending
//! element.

use std::fmt;

use thiserror::Error;

use crate::validate::Violation;

/// Kind of entity an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    /// The document root
    Canvas,
    /// An element of `nodes`
    Node,
    /// An element of `edges`
    Edge,
}

impl Entity {
    /// Wire name of the entity
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canvas => "canvas",
            Self::Node => "node",
            Self::Edge => "edge",
        }
    }
}

/// Position of a decode error inside the document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Entity being decoded
    pub entity: Entity,
    /// Index in `nodes` / `edges` (`None` for the canvas root)
    pub index: Option<usize>,
    /// Id of the element, once it has been read
    pub id: Option<String>,
}

impl Location {
    /// The document root
    #[must_use]
    pub fn canvas() -> Self {
        Self {
            entity: Entity::Canvas,
            index: None,
            id: None,
        }
    }

    /// The node at `index`
    #[must_use]
    pub fn node(index: usize) -> Self {
        Self {
            entity: Entity::Node,
            index: Some(index),
            id: None,
        }
    }

    /// The edge at `index`
    #[must_use]
    pub fn edge(index: usize) -> Self {
        Self {
            entity: Entity::Edge,
            index: Some(index),
            id: None,
        }
    }

    /// Attach the element id
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entity.as_str())?;
        if let Some(index) = self.index {
            write!(f, "[{index}]")?;
        }
        if let Some(id) = &self.id {
            write!(f, " (id {id:?})")?;
        }
        Ok(())
    }
}

/// Canvas error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input is not valid JSON
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// A `#`-prefixed color that is not `#RGB` or `#RRGGBB`
    #[error("{location}: invalid color format in `{field}`: {value:?}")]
    InvalidColorFormat {
        /// Where the color was found
        location: Location,
        /// Field holding the color
        field: &'static str,
        /// Raw wire value
        value: String,
    },

    /// A color that is neither hex nor a preset in `1..=6`
    #[error("{location}: invalid color value in `{field}`: {value:?}")]
    InvalidColorValue {
        /// Where the color was found
        location: Location,
        /// Field holding the color
        field: &'static str,
        /// Raw wire value
        value: String,
    },

    /// A field mandatory for the entity kind is absent or null
    #[error("{location}: missing required field `{field}`")]
    MissingRequiredField {
        /// Entity missing the field
        location: Location,
        /// Missing field
        field: &'static str,
    },

    /// Unrecognized token for an enumerated field
    #[error("{location}: unknown value {value:?} for `{field}`")]
    UnknownEnumValue {
        /// Entity holding the field
        location: Location,
        /// Enumerated field
        field: &'static str,
        /// Unrecognized token
        value: String,
    },

    /// A field holds a JSON value of the wrong type
    #[error("{location}: field `{field}` must be {expected}")]
    InvalidFieldType {
        /// Entity holding the field
        location: Location,
        /// Offending field
        field: &'static str,
        /// Expected JSON type
        expected: &'static str,
    },

    /// Strict decode found structural violations
    #[error("canvas failed validation with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    /// Serialization failed
    #[error("encode error: {0}")]
    Encode(String),
}

impl Error {
    /// Create a malformed JSON error
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedJson(msg.into())
    }

    /// Create an encode error
    #[must_use]
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Location of the failing element, if the error has one
    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::InvalidColorFormat { location, .. }
            | Self::InvalidColorValue { location, .. }
            | Self::MissingRequiredField { location, .. }
            | Self::UnknownEnumValue { location, .. }
            | Self::InvalidFieldType { location, .. } => Some(location),
            Self::MalformedJson(_) | Self::Validation(_) | Self::Encode(_) => None,
        }
    }

    /// Whether the error came from decoding (as opposed to encoding)
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        !matches!(self, Self::Encode(_))
    }

    /// Get a stable error code
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedJson(_) => "malformed_json",
            Self::InvalidColorFormat { .. } => "invalid_color_format",
            Self::InvalidColorValue { .. } => "invalid_color_value",
            Self::MissingRequiredField { .. } => "missing_required_field",
            Self::UnknownEnumValue { .. } => "unknown_enum_value",
            Self::InvalidFieldType { .. } => "invalid_field_type",
            Self::Validation(_) => "validation_failed",
            Self::Encode(_) => "encode_error",
        }
    }
}

/// Unrecognized token when parsing an enumerated wire value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant {0:?}")]
pub struct UnknownVariant(pub String);

/// Result type alias for canvas operations
pub type Result<T> = std::result::Result<T, Error>;
