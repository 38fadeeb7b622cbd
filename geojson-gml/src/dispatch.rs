//! Rendering of geometries whose kind is only known at runtime.

use geojson::feature::Id;
use geojson::{Feature, Geometry, Value};
use serde_json::Value as JsonValue;

use crate::error::GmlError;
use crate::kind::GeometryKind;
use crate::multi::{MULTI_CURVE, MULTI_GEOMETRY, MULTI_POINT, MULTI_SURFACE};
use crate::params::{GmlId, RenderParams, Scope};
use crate::primitives::{render_root, write_line_string, write_point, write_polygon};

/// Converts a GeoJSON geometry of any kind into GML.
///
/// `gml_id` becomes the `gml:id` of the root element. If it is `None`, [`RenderParams::gml_id`]
/// is used instead, and if that is missing too a warning is logged.
pub fn render(
    geometry: &Geometry,
    gml_id: Option<&GmlId>,
    params: &RenderParams,
) -> Result<String, GmlError> {
    render_root(
        GeometryKind::of(&geometry.value),
        gml_id,
        params,
        |out, scope| write_geometry(out, &geometry.value, scope),
    )
}

/// Converts an untyped GeoJSON geometry object into GML.
///
/// Fails with [`GmlError::UnknownGeometryType`] if the `type` of the object is not a GeoJSON
/// geometry type, and with [`GmlError::UnsupportedMemberType`] if a (possibly nested)
/// `GeometryCollection` member has such a type.
pub fn render_json(
    json: &JsonValue,
    gml_id: Option<&GmlId>,
    params: &RenderParams,
) -> Result<String, GmlError> {
    let kind = declared_kind(json, false)?;
    log::debug!("Rendering {kind} geometry from JSON");

    let geometry: Geometry = serde_json::from_value(json.clone())?;
    render(&geometry, gml_id, params)
}

/// Parses a GeoJSON geometry object from a string and converts it into GML.
///
/// See [`render_json`].
pub fn render_str(
    json: &str,
    gml_id: Option<&GmlId>,
    params: &RenderParams,
) -> Result<String, GmlError> {
    let json: JsonValue = serde_json::from_str(json)?;
    render_json(&json, gml_id, params)
}

/// Converts the geometry of a GeoJSON feature into GML, using the feature id as `gml:id`.
///
/// Features without an id fall back to [`RenderParams::gml_id`]. Fails with
/// [`GmlError::MalformedGeometry`] if the feature has no geometry.
pub fn feature(feature: &Feature, params: &RenderParams) -> Result<String, GmlError> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| GmlError::MalformedGeometry("feature has no geometry".into()))?;
    let gml_id = feature.id.as_ref().map(feature_gml_id).transpose()?;

    render(geometry, gml_id.as_ref(), params)
}

pub(crate) fn write_geometry(out: &mut String, value: &Value, scope: Scope) -> Result<(), GmlError> {
    match value {
        Value::Point(position) => write_point(out, position, scope),
        Value::LineString(positions) => write_line_string(out, positions, scope),
        Value::Polygon(rings) => write_polygon(out, rings, scope),
        Value::MultiPoint(points) => MULTI_POINT.write(out, points, scope, |out, p, scope| {
            write_point(out, p, scope)
        }),
        Value::MultiLineString(lines) => {
            MULTI_CURVE.write(out, lines, scope, |out, line, scope| {
                write_line_string(out, line, scope)
            })
        }
        Value::MultiPolygon(polygons) => {
            MULTI_SURFACE.write(out, polygons, scope, |out, polygon, scope| {
                write_polygon(out, polygon, scope)
            })
        }
        Value::GeometryCollection(geometries) => {
            MULTI_GEOMETRY.write(out, geometries, scope, |out, geometry, scope| {
                write_geometry(out, &geometry.value, scope)
            })
        }
    }
}

fn declared_kind(json: &JsonValue, is_member: bool) -> Result<GeometryKind, GmlError> {
    let name = json
        .get("type")
        .and_then(JsonValue::as_str)
        .unwrap_or_default();
    let kind = name.parse::<GeometryKind>().map_err(|err| {
        if is_member {
            GmlError::UnsupportedMemberType(name.to_string())
        } else {
            err
        }
    })?;

    if kind == GeometryKind::GeometryCollection {
        let members = json.get("geometries").and_then(JsonValue::as_array);
        for member in members.into_iter().flatten() {
            declared_kind(member, true)?;
        }
    }

    Ok(kind)
}

fn feature_gml_id(id: &Id) -> Result<GmlId, GmlError> {
    match id {
        Id::String(v) => Ok(GmlId::Text(v.clone())),
        Id::Number(v) => {
            GmlId::from_json_number(v).ok_or_else(|| GmlError::invalid_attr("gml:id", v))
        }
    }
}
