//! Renderers of multi-geometries and geometry collections.
//!
//! GML aggregates wrap all members in a single array property element, e.g.
//! `<gml:MultiPoint><gml:pointMembers>...</gml:pointMembers></gml:MultiPoint>`. Members get
//! their `gml:id` from [`RenderParams::gml_ids`] by position and share all other parameters
//! except the root-only ones.

use geojson::{LineStringType, PolygonType, Position};

use crate::dispatch::write_geometry;
use crate::error::GmlError;
use crate::kind::GeometryKind;
use crate::params::{GmlId, RenderParams, Scope};
use crate::primitives::{
    close_element, open_element, render_root, write_line_string, write_point, write_polygon,
};

/// GML aggregate element together with the name of its member array property.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Aggregate {
    kind: GeometryKind,
    members_element: &'static str,
}

pub(crate) const MULTI_POINT: Aggregate = Aggregate {
    kind: GeometryKind::MultiPoint,
    members_element: "pointMembers",
};

pub(crate) const MULTI_CURVE: Aggregate = Aggregate {
    kind: GeometryKind::MultiLineString,
    members_element: "curveMembers",
};

pub(crate) const MULTI_SURFACE: Aggregate = Aggregate {
    kind: GeometryKind::MultiPolygon,
    members_element: "surfaceMembers",
};

pub(crate) const MULTI_GEOMETRY: Aggregate = Aggregate {
    kind: GeometryKind::GeometryCollection,
    members_element: "geometryMembers",
};

impl Aggregate {
    /// Writes the aggregate element, rendering every member with `write_member`.
    ///
    /// An empty member list produces an empty member array element.
    pub fn write<'a, M, F>(
        &self,
        out: &mut String,
        members: &[M],
        scope: Scope<'a>,
        mut write_member: F,
    ) -> Result<(), GmlError>
    where
        F: FnMut(&mut String, &M, Scope<'a>) -> Result<(), GmlError>,
    {
        let element = self.kind.gml_element();
        open_element(out, element, scope)?;
        out.push_str("<gml:");
        out.push_str(self.members_element);
        out.push('>');

        for (index, member) in members.iter().enumerate() {
            write_member(out, member, scope.member(index))?;
        }

        close_element(out, self.members_element);
        close_element(out, element);
        Ok(())
    }

    fn render<M, F>(
        &self,
        members: &[M],
        gml_id: Option<&GmlId>,
        params: &RenderParams,
        write_member: F,
    ) -> Result<String, GmlError>
    where
        F: FnMut(&mut String, &M, Scope<'_>) -> Result<(), GmlError>,
    {
        render_root(self.kind, gml_id, params, |out, scope| {
            self.write(out, members, scope, write_member)
        })
    }
}

/// Converts the coordinates of a GeoJSON `MultiPoint` into a `gml:MultiPoint`.
pub fn multi_point(
    points: &[Position],
    gml_id: Option<&GmlId>,
    params: &RenderParams,
) -> Result<String, GmlError> {
    MULTI_POINT.render(points, gml_id, params, |out, p, scope| {
        write_point(out, p, scope)
    })
}

/// Converts the coordinates of a GeoJSON `MultiLineString` into a `gml:MultiCurve`.
pub fn multi_line_string(
    lines: &[LineStringType],
    gml_id: Option<&GmlId>,
    params: &RenderParams,
) -> Result<String, GmlError> {
    MULTI_CURVE.render(lines, gml_id, params, |out, line, scope| {
        write_line_string(out, line, scope)
    })
}

/// Converts the coordinates of a GeoJSON `MultiPolygon` into a `gml:MultiSurface`.
pub fn multi_polygon(
    polygons: &[PolygonType],
    gml_id: Option<&GmlId>,
    params: &RenderParams,
) -> Result<String, GmlError> {
    MULTI_SURFACE.render(polygons, gml_id, params, |out, polygon, scope| {
        write_polygon(out, polygon, scope)
    })
}

/// Converts the members of a GeoJSON `GeometryCollection` into a `gml:MultiGeometry`.
///
/// Every member is rendered according to its own type, so collections may be nested.
pub fn geometry_collection(
    geometries: &[geojson::Geometry],
    gml_id: Option<&GmlId>,
    params: &RenderParams,
) -> Result<String, GmlError> {
    MULTI_GEOMETRY.render(geometries, gml_id, params, |out, geometry, scope| {
        write_geometry(out, &geometry.value, scope)
    })
}
