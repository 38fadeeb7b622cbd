//! Renderers of single geometries: points, line strings and polygons.

use geojson::Position;

use crate::error::GmlError;
use crate::kind::GeometryKind;
use crate::order::CoordinateOrder;
use crate::params::{GmlId, RenderParams, Scope};

/// Converts the coordinates of a GeoJSON `Point` into a `gml:Point`.
pub fn point(
    position: &[f64],
    gml_id: Option<&GmlId>,
    params: &RenderParams,
) -> Result<String, GmlError> {
    render_root(GeometryKind::Point, gml_id, params, |out, scope| {
        write_point(out, position, scope)
    })
}

/// Converts the coordinates of a GeoJSON `LineString` into a `gml:LineString`.
pub fn line_string(
    positions: &[Position],
    gml_id: Option<&GmlId>,
    params: &RenderParams,
) -> Result<String, GmlError> {
    render_root(GeometryKind::LineString, gml_id, params, |out, scope| {
        write_line_string(out, positions, scope)
    })
}

/// Converts the coordinates of a GeoJSON `Polygon` into a `gml:Polygon`.
///
/// The first ring becomes `gml:exterior`, every following ring a `gml:interior`. Winding order
/// is not checked. Fails with [`GmlError::MalformedGeometry`] if there are no rings at all.
pub fn polygon(
    rings: &[Vec<Position>],
    gml_id: Option<&GmlId>,
    params: &RenderParams,
) -> Result<String, GmlError> {
    render_root(GeometryKind::Polygon, gml_id, params, |out, scope| {
        write_polygon(out, rings, scope)
    })
}

/// Creates the root scope for `params` and runs `write` on an empty buffer.
pub(crate) fn render_root<F>(
    kind: GeometryKind,
    gml_id: Option<&GmlId>,
    params: &RenderParams,
    write: F,
) -> Result<String, GmlError>
where
    F: FnOnce(&mut String, Scope<'_>) -> Result<(), GmlError>,
{
    let scope = Scope::root(kind, gml_id, params)?;
    let mut out = String::new();
    write(&mut out, scope)?;
    Ok(out)
}

pub(crate) fn open_element(out: &mut String, name: &str, scope: Scope) -> Result<(), GmlError> {
    out.push_str("<gml:");
    out.push_str(name);
    scope.write_element_attrs(out)?;
    out.push('>');
    Ok(())
}

pub(crate) fn close_element(out: &mut String, name: &str) {
    out.push_str("</gml:");
    out.push_str(name);
    out.push('>');
}

pub(crate) fn write_point(
    out: &mut String,
    position: &[f64],
    scope: Scope,
) -> Result<(), GmlError> {
    if position.is_empty() {
        return Err(GmlError::MalformedGeometry(
            "point has no coordinates".into(),
        ));
    }

    open_element(out, "Point", scope)?;
    out.push_str("<gml:pos");
    scope.write_position_attrs(out)?;
    out.push('>');
    write_position(out, position, scope.order)?;
    out.push_str("</gml:pos>");
    close_element(out, "Point");
    Ok(())
}

pub(crate) fn write_line_string(
    out: &mut String,
    positions: &[Position],
    scope: Scope,
) -> Result<(), GmlError> {
    open_element(out, "LineString", scope)?;
    write_pos_list(out, positions, scope)?;
    close_element(out, "LineString");
    Ok(())
}

// GeoJSON has no standalone ring type, so rings are only reachable through polygons.
fn write_linear_ring(
    out: &mut String,
    positions: &[Position],
    scope: Scope,
) -> Result<(), GmlError> {
    open_element(out, "LinearRing", scope)?;
    write_pos_list(out, positions, scope)?;
    close_element(out, "LinearRing");
    Ok(())
}

pub(crate) fn write_polygon(
    out: &mut String,
    rings: &[Vec<Position>],
    scope: Scope,
) -> Result<(), GmlError> {
    let Some((exterior, interiors)) = rings.split_first() else {
        return Err(GmlError::MalformedGeometry(
            "polygon must have an exterior ring".into(),
        ));
    };

    open_element(out, "Polygon", scope)?;

    out.push_str("<gml:exterior>");
    write_linear_ring(out, exterior, scope.inner())?;
    out.push_str("</gml:exterior>");

    for ring in interiors {
        out.push_str("<gml:interior>");
        write_linear_ring(out, ring, scope.inner())?;
        out.push_str("</gml:interior>");
    }

    close_element(out, "Polygon");
    Ok(())
}

fn write_pos_list(out: &mut String, positions: &[Position], scope: Scope) -> Result<(), GmlError> {
    out.push_str("<gml:posList");
    scope.write_position_attrs(out)?;
    out.push('>');
    for (index, position) in positions.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        write_position(out, position, scope.order)?;
    }
    out.push_str("</gml:posList>");
    Ok(())
}

fn write_position(
    out: &mut String,
    position: &[f64],
    order: CoordinateOrder,
) -> Result<(), GmlError> {
    if position.len() < 2 {
        return Err(GmlError::MalformedGeometry(format!(
            "position must contain at least 2 dimensions, but has {}",
            position.len()
        )));
    }

    if let Some(value) = position.iter().find(|v| !v.is_finite()) {
        return Err(GmlError::MalformedGeometry(format!(
            "position contains non-finite value {value}"
        )));
    }

    for (index, value) in order.apply(position).iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        out.push_str(&value.to_string());
    }

    Ok(())
}
