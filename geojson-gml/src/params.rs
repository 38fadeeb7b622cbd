//! Rendering options.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::attrs::{write_attrs, AttrValue};
use crate::error::GmlError;
use crate::kind::GeometryKind;
use crate::order::CoordinateOrder;

/// Value of a `gml:id` attribute.
///
/// Integers are kept exactly, so ids beyond the range where `f64` is exact are written back
/// unchanged. Non-negative integers are always stored as [`GmlId::Unsigned`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GmlId {
    /// Textual identifier.
    Text(String),
    /// Non-negative integer identifier.
    Unsigned(u64),
    /// Negative integer identifier.
    Signed(i64),
    /// Fractional identifier. Must be finite.
    Float(f64),
}

impl GmlId {
    pub(crate) fn as_attr(&self) -> AttrValue<'_> {
        match self {
            GmlId::Text(v) => AttrValue::Text(v),
            GmlId::Unsigned(v) => AttrValue::from(*v),
            GmlId::Signed(v) => AttrValue::from(*v),
            GmlId::Float(v) => AttrValue::Number(*v),
        }
    }

    /// Exact identifier for a JSON number, such as the id of a GeoJSON feature.
    pub fn from_json_number(value: &serde_json::Number) -> Option<Self> {
        value
            .as_u64()
            .map(Self::Unsigned)
            .or_else(|| value.as_i64().map(Self::Signed))
            .or_else(|| value.as_f64().map(Self::Float))
    }
}

impl From<&str> for GmlId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for GmlId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for GmlId {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<u64> for GmlId {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<i64> for GmlId {
    fn from(value: i64) -> Self {
        u64::try_from(value).map_or(Self::Signed(value), Self::Unsigned)
    }
}

impl From<u32> for GmlId {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<i32> for GmlId {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl Display for GmlId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GmlId::Text(v) => write!(f, "{v}"),
            GmlId::Unsigned(v) => write!(f, "{v}"),
            GmlId::Signed(v) => write!(f, "{v}"),
            GmlId::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Optional parameters of a conversion.
///
/// Every option is absent by default, and absent options never produce attributes. The struct
/// can be deserialized from JSON using the camelCase option names (`srsName`, `srsDimension`,
/// `gmlId`, `gmlIds`, `order`, `xmlns`); `null` is the same as a missing option.
///
/// ```
/// use geojson_gml::{CoordinateOrder, RenderParams};
///
/// # fn main() -> Result<(), serde_json::Error> {
/// let params = RenderParams::default()
///     .with_srs_name("EPSG:4326")
///     .with_order(CoordinateOrder::LatLon);
/// assert_eq!(
///     params,
///     RenderParams::from_json(r#"{"srsName": "EPSG:4326", "order": "lat,lon"}"#)?
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderParams {
    /// SRS of the geometry, e.g. `EPSG:4326`. Set on the root element only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srs_name: Option<String>,
    /// Number of components in each position. Set on every `gml:pos` and `gml:posList`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srs_dimension: Option<u32>,
    /// `gml:id` of the root element, used when no identifier is given to the render call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gml_id: Option<GmlId>,
    /// `gml:id`s of the members of a multi-geometry, applied by position.
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub gml_ids: Vec<GmlId>,
    /// Axis order of the rendered coordinates.
    #[serde(deserialize_with = "null_as_default")]
    pub order: CoordinateOrder,
    /// Namespace URI to bind the `gml` prefix to on the root element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
}

impl RenderParams {
    /// Reads parameters from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets the `srsName` of the root element.
    pub fn with_srs_name(mut self, srs_name: impl Into<String>) -> Self {
        self.srs_name = Some(srs_name.into());
        self
    }

    /// Sets the `srsDimension` of position elements.
    pub fn with_srs_dimension(mut self, srs_dimension: u32) -> Self {
        self.srs_dimension = Some(srs_dimension);
        self
    }

    /// Sets the fallback `gml:id` of the root element.
    pub fn with_gml_id(mut self, gml_id: impl Into<GmlId>) -> Self {
        self.gml_id = Some(gml_id.into());
        self
    }

    /// Sets the `gml:id`s of multi-geometry members.
    pub fn with_gml_ids<I, T>(mut self, gml_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<GmlId>,
    {
        self.gml_ids = gml_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the coordinate axis order.
    pub fn with_order(mut self, order: CoordinateOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the namespace URI declared on the root element.
    pub fn with_xmlns(mut self, xmlns: impl Into<String>) -> Self {
        self.xmlns = Some(xmlns.into());
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parameters as seen by a single element in the output tree.
///
/// Root-only attributes are dropped when descending into members and rings.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scope<'a> {
    pub gml_id: Option<&'a GmlId>,
    pub srs_name: Option<&'a str>,
    pub xmlns: Option<&'a str>,
    pub gml_ids: &'a [GmlId],
    pub srs_dimension: Option<u32>,
    pub order: CoordinateOrder,
}

impl<'a> Scope<'a> {
    pub fn root(
        kind: GeometryKind,
        gml_id: Option<&'a GmlId>,
        params: &'a RenderParams,
    ) -> Result<Self, GmlError> {
        if params.srs_dimension == Some(0) {
            return Err(GmlError::invalid_attr("srsDimension", 0));
        }

        let gml_id = gml_id.or(params.gml_id.as_ref());
        if gml_id.is_none() {
            log::warn!("No gml:id supplied for {kind}");
        }

        Ok(Self {
            gml_id,
            srs_name: params.srs_name.as_deref(),
            xmlns: params.xmlns.as_deref(),
            gml_ids: &params.gml_ids,
            srs_dimension: params.srs_dimension,
            order: params.order,
        })
    }

    /// Scope of the member at `index` of a multi-geometry.
    pub fn member(&self, index: usize) -> Self {
        Self {
            gml_id: self.gml_ids.get(index),
            ..self.inner()
        }
    }

    /// Scope of an anonymous child element, such as a polygon ring.
    pub fn inner(&self) -> Self {
        Self {
            gml_id: None,
            srs_name: None,
            xmlns: None,
            gml_ids: &[],
            ..*self
        }
    }

    pub fn write_element_attrs(&self, out: &mut String) -> Result<(), GmlError> {
        write_attrs(
            out,
            &[
                ("gml:id", self.gml_id.map(GmlId::as_attr)),
                ("srsName", self.srs_name.map(AttrValue::Text)),
                ("xmlns:gml", self.xmlns.map(AttrValue::Text)),
            ],
        )
    }

    pub fn write_position_attrs(&self, out: &mut String) -> Result<(), GmlError> {
        write_attrs(out, &[("srsDimension", self.srs_dimension.map(AttrValue::from))])
    }
}
