use std::{fmt, str::FromStr};

use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{Deserialize, Serialize};
use utility::geo;

pub type Longitude = f64;
pub type Latitude = f64;

/// A position given as `[x, y]`. Once converted with
/// [`Coordinate::to_wgs84`] it is `[longitude, latitude]` in degrees.
///
/// Values are not range checked. Whatever the drawing produced is handed on
/// to the distance formula as is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub longitude: Longitude,
    pub latitude: Latitude,
}

impl Coordinate {
    pub fn new(longitude: Longitude, latitude: Latitude) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Converts a coordinate given in `projection` to WGS84 degrees.
    pub fn to_wgs84(self, projection: Projection) -> Self {
        match projection {
            Projection::Wgs84 => self,
            Projection::WebMercator => {
                let (longitude, latitude) =
                    geo::web_mercator_to_lon_lat(self.longitude, self.latitude);
                Self::new(longitude, latitude)
            }
        }
    }

    /// Converts a WGS84 coordinate into `projection`.
    pub fn project(self, projection: Projection) -> Self {
        match projection {
            Projection::Wgs84 => self,
            Projection::WebMercator => {
                let (x, y) =
                    geo::lon_lat_to_web_mercator(self.longitude, self.latitude);
                Self::new(x, y)
            }
        }
    }

    /// Great-circle distance in kilometers, unrounded. Both coordinates must
    /// be WGS84.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        geo::haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.longitude, value.latitude]
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.longitude, self.latitude)
    }
}

impl JsonSchema for Coordinate {
    fn schema_name() -> String {
        "Coordinate".to_owned()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        <[f64; 2]>::json_schema(gen)
    }
}

/// Coordinate reference systems a drawing can arrive in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
pub enum Projection {
    #[serde(rename = "EPSG:4326")]
    Wgs84,
    #[default]
    #[serde(rename = "EPSG:3857")]
    WebMercator,
}

impl Projection {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Wgs84 => "EPSG:4326",
            Self::WebMercator => "EPSG:3857",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProjectionError(pub String);

impl fmt::Display for ParseProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported projection: {:?}", self.0)
    }
}

impl std::error::Error for ParseProjectionError {}

impl FromStr for Projection {
    type Err = ParseProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EPSG:4326" | "4326" | "WGS84" => Ok(Self::Wgs84),
            "EPSG:3857" | "3857" | "EPSG:900913" | "WEBMERCATOR" => {
                Ok(Self::WebMercator)
            }
            _ => Err(ParseProjectionError(s.to_owned())),
        }
    }
}
