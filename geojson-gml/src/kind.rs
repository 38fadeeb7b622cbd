//! See documentation for [`GeometryKind`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::GmlError;

/// The seven GeoJSON geometry kinds, as declared by the `type` member of a geometry object.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// `Point`, rendered as `gml:Point`.
    Point,
    /// `LineString`, rendered as `gml:LineString`.
    LineString,
    /// `Polygon`, rendered as `gml:Polygon`.
    Polygon,
    /// `MultiPoint`, rendered as `gml:MultiPoint`.
    MultiPoint,
    /// `MultiLineString`, rendered as `gml:MultiCurve`.
    MultiLineString,
    /// `MultiPolygon`, rendered as `gml:MultiSurface`.
    MultiPolygon,
    /// `GeometryCollection`, rendered as `gml:MultiGeometry`.
    GeometryCollection,
}

impl GeometryKind {
    /// GeoJSON name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }

    /// Local name of the GML element the kind is rendered to.
    pub fn gml_element(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiCurve",
            GeometryKind::MultiPolygon => "MultiSurface",
            GeometryKind::GeometryCollection => "MultiGeometry",
        }
    }

    /// Kind of a typed geojson geometry value.
    pub fn of(value: &geojson::Value) -> Self {
        match value {
            geojson::Value::Point(_) => GeometryKind::Point,
            geojson::Value::LineString(_) => GeometryKind::LineString,
            geojson::Value::Polygon(_) => GeometryKind::Polygon,
            geojson::Value::MultiPoint(_) => GeometryKind::MultiPoint,
            geojson::Value::MultiLineString(_) => GeometryKind::MultiLineString,
            geojson::Value::MultiPolygon(_) => GeometryKind::MultiPolygon,
            geojson::Value::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }
}

impl FromStr for GeometryKind {
    type Err = GmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Point" => GeometryKind::Point,
            "LineString" => GeometryKind::LineString,
            "Polygon" => GeometryKind::Polygon,
            "MultiPoint" => GeometryKind::MultiPoint,
            "MultiLineString" => GeometryKind::MultiLineString,
            "MultiPolygon" => GeometryKind::MultiPolygon,
            "GeometryCollection" => GeometryKind::GeometryCollection,
            _ => return Err(GmlError::UnknownGeometryType(s.to_string())),
        })
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_round_trips_names() {
        for kind in [
            GeometryKind::Point,
            GeometryKind::LineString,
            GeometryKind::Polygon,
            GeometryKind::MultiPoint,
            GeometryKind::MultiLineString,
            GeometryKind::MultiPolygon,
            GeometryKind::GeometryCollection,
        ] {
            assert_eq!(kind.as_str().parse::<GeometryKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_matches!(
            "Bogus".parse::<GeometryKind>(),
            Err(GmlError::UnknownGeometryType(name)) if name == "Bogus"
        );
        assert!("point".parse::<GeometryKind>().is_err());
        assert!("LinearRing".parse::<GeometryKind>().is_err());
    }

    #[test]
    fn gml_names_diverge_for_multi_kinds() {
        assert_eq!(GeometryKind::MultiLineString.gml_element(), "MultiCurve");
        assert_eq!(GeometryKind::MultiPolygon.gml_element(), "MultiSurface");
        assert_eq!(GeometryKind::GeometryCollection.gml_element(), "MultiGeometry");
    }
}
