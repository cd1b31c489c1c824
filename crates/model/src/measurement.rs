use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    coordinate::Projection,
    path::{total_distance, Path, SegmentDistance},
    shape::Shape,
    ExampleData,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PathMeasurement {
    /// `distances_km[i]` belongs to the vertices `i` and `i + 1`.
    pub distances_km: Vec<SegmentDistance>,
    pub total_km: f64,
}

impl PathMeasurement {
    pub fn of(path: &Path) -> Self {
        let distances_km = path.segment_distances();
        let total_km = total_distance(&distances_km);
        Self {
            distances_km,
            total_km,
        }
    }
}

/// A shape in WGS84 together with the distances along each of its paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub shape: Shape,
    pub paths: Vec<PathMeasurement>,
}

impl Measurement {
    /// Measures a shape whose coordinates are already WGS84.
    pub fn of(shape: Shape) -> Self {
        let paths = shape.paths().iter().map(PathMeasurement::of).collect();
        Self { shape, paths }
    }

    /// Converts a shape from the projection it was drawn in and measures it.
    /// Distances are always taken on WGS84 coordinates, whatever projection
    /// the map is displayed in.
    pub fn of_projected(shape: &Shape, projection: Projection) -> Self {
        Self::of(shape.to_wgs84(projection))
    }
}

impl ExampleData for Measurement {
    fn example_data() -> Self {
        Measurement::of(Shape::example_data())
    }
}
