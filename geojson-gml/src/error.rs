//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GmlError {
    /// The geometry `type` is not one of the seven GeoJSON geometry kinds.
    #[error("unknown geometry type: {0}")]
    UnknownGeometryType(String),
    /// A member of a geometry collection has a `type` that cannot be rendered.
    #[error("unsupported member type: {0}")]
    UnsupportedMemberType(String),
    /// An attribute value is not a finite number or a string.
    #[error("invalid {name}: {value}")]
    InvalidAttributeValue {
        /// Attribute name.
        name: String,
        /// Offending value.
        value: String,
    },
    /// Coordinate order is neither native (lon,lat) nor swapped (lat,lon).
    #[error("invalid order: {0}")]
    InvalidOrderMode(String),
    /// Coordinate structure does not have the shape required by the geometry kind.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),
}

impl GmlError {
    pub(crate) fn invalid_attr(name: &str, value: impl ToString) -> Self {
        Self::InvalidAttributeValue {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

impl From<geojson::Error> for GmlError {
    fn from(value: geojson::Error) -> Self {
        Self::MalformedGeometry(value.to_string())
    }
}

impl From<serde_json::Error> for GmlError {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedGeometry(value.to_string())
    }
}
