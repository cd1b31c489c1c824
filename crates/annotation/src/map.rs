use model::coordinate::{Coordinate, Projection};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The map a drawing session draws on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    /// Projection the map is rendered in. Finished drawings arrive in it.
    pub projection: Projection,
    /// Center in WGS84 degrees.
    pub center: Coordinate,
    pub zoom: f64,
}

impl MapView {
    pub fn new(projection: Projection) -> Self {
        Self {
            projection,
            ..Default::default()
        }
    }

    /// The center in the map projection, as the mapping library expects it.
    pub fn projected_center(&self) -> Coordinate {
        self.center.project(self.projection)
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            projection: Projection::WebMercator,
            center: Coordinate::new(0.0, 0.0),
            zoom: 2.0,
        }
    }
}
