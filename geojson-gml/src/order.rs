//! Axis order of rendered coordinates.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GmlError;

/// Axis order of the coordinates written into `gml:pos` and `gml:posList`.
///
/// GeoJSON positions are always (longitude, latitude[, elevation]) as required by RFC 7946, but
/// many coordinate reference systems declare latitude first. See <https://macwright.com/lonlat/>.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CoordinateOrder {
    /// GeoJSON native order: longitude/easting first.
    #[default]
    LonLat,
    /// Latitude/northing first. Any elevation stays in third position.
    LatLon,
}

impl CoordinateOrder {
    /// Returns the position with axes in this order.
    ///
    /// The input is never modified. For [`CoordinateOrder::LonLat`] the position is returned as
    /// is; for [`CoordinateOrder::LatLon`] a new position is allocated with the first two
    /// components exchanged. Positions with less than two components are returned unchanged.
    pub fn apply(self, position: &[f64]) -> Cow<'_, [f64]> {
        match self {
            CoordinateOrder::LatLon if position.len() >= 2 => {
                let mut swapped = position.to_vec();
                swapped.swap(0, 1);
                Cow::Owned(swapped)
            }
            _ => Cow::Borrowed(position),
        }
    }

    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateOrder::LonLat => "lon,lat",
            CoordinateOrder::LatLon => "lat,lon",
        }
    }
}

impl FromStr for CoordinateOrder {
    type Err = GmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lon,lat" | "native" => Ok(CoordinateOrder::LonLat),
            "lat,lon" | "swapped" => Ok(CoordinateOrder::LatLon),
            _ => Err(GmlError::InvalidOrderMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for CoordinateOrder {
    type Error = GmlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CoordinateOrder> for String {
    fn from(value: CoordinateOrder) -> Self {
        value.as_str().to_string()
    }
}

impl Display for CoordinateOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn native_order_borrows_input() {
        let position = vec![102.0, 0.5];
        let ordered = CoordinateOrder::LonLat.apply(&position);
        assert_matches!(ordered, Cow::Borrowed(_));
        assert_eq!(&*ordered, &[102.0, 0.5]);
    }

    #[test]
    fn swapped_order_exchanges_first_two_axes() {
        let position = vec![102.0, 0.5];
        assert_eq!(&*CoordinateOrder::LatLon.apply(&position), &[0.5, 102.0]);
    }

    #[test]
    fn swapped_order_keeps_elevation_last() {
        let position = vec![10.0, 20.0, 30.0];
        assert_eq!(
            &*CoordinateOrder::LatLon.apply(&position),
            &[20.0, 10.0, 30.0]
        );
    }

    #[test]
    fn swapping_does_not_touch_input() {
        let position = vec![1.0, 2.0, 3.0];
        let _ = CoordinateOrder::LatLon.apply(&position);
        let _ = CoordinateOrder::LatLon.apply(&position);
        assert_eq!(position, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn parse() {
        assert_eq!("lon,lat".parse::<CoordinateOrder>(), Ok(CoordinateOrder::LonLat));
        assert_eq!("native".parse::<CoordinateOrder>(), Ok(CoordinateOrder::LonLat));
        assert_eq!("lat,lon".parse::<CoordinateOrder>(), Ok(CoordinateOrder::LatLon));
        assert_eq!("swapped".parse::<CoordinateOrder>(), Ok(CoordinateOrder::LatLon));
        assert_matches!(
            "lat-lon".parse::<CoordinateOrder>(),
            Err(GmlError::InvalidOrderMode(mode)) if mode == "lat-lon"
        );
    }

    #[test]
    fn serde_representation() {
        let order: CoordinateOrder = serde_json::from_str(r#""swapped""#).expect("valid order");
        assert_eq!(order, CoordinateOrder::LatLon);
        assert_eq!(
            serde_json::to_string(&order).expect("serializable"),
            r#""lat,lon""#
        );
        assert!(serde_json::from_str::<CoordinateOrder>(r#""up""#).is_err());
    }
}
