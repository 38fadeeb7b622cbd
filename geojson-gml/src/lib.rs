//! Conversion of [GeoJSON](https://datatracker.ietf.org/doc/html/rfc7946) geometries into
//! [GML 3.2.1](https://www.ogc.org/standard/gml/) markup.
//!
//! Only what GeoJSON can store is supported: the seven simple feature geometry kinds. The output
//! is a single XML fragment using the `gml:` prefix on every element. The prefix must be bound to
//! [`GML_NAMESPACE`] by an enclosing element, unless [`RenderParams::xmlns`] is set, in which case
//! the root element declares it.
//!
//! ```
//! use geojson_gml::{render, RenderParams};
//!
//! # fn main() -> Result<(), geojson_gml::GmlError> {
//! let geometry = geojson::Geometry::new(geojson::Value::Point(vec![102.0, 0.5]));
//! let gml = render(&geometry, Some(&"ab.1".into()), &RenderParams::default())?;
//! assert_eq!(gml, r#"<gml:Point gml:id="ab.1"><gml:pos>102 0.5</gml:pos></gml:Point>"#);
//! # Ok(())
//! # }
//! ```
//!
//! Untyped input is accepted by [`render_json`] and [`render_str`], which report unknown geometry
//! types as errors instead of ignoring them.

pub mod attrs;
mod dispatch;
pub mod error;
mod kind;
mod multi;
mod order;
mod params;
mod primitives;

pub use attrs::{escape_attr_value, AttrValue};
pub use dispatch::{feature, render, render_json, render_str};
pub use error::GmlError;
pub use kind::GeometryKind;
pub use multi::{geometry_collection, multi_line_string, multi_point, multi_polygon};
pub use order::CoordinateOrder;
pub use params::{GmlId, RenderParams};
pub use primitives::{line_string, point, polygon};

/// Namespace URI of GML 3.2.
pub const GML_NAMESPACE: &str = "http://www.opengis.net/gml/3.2";
