use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    coordinate::{Coordinate, Projection},
    path::Path,
    ExampleData,
};

/// The kind of geometry a drawing produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum DrawMode {
    LineString,
    Polygon,
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineString => f.write_str("LineString"),
            Self::Polygon => f.write_str("Polygon"),
        }
    }
}

/// A finished drawing. Serialized like a GeoJSON geometry, e.g.
/// `{"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [0, 1], [0, 0]]]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "coordinates")]
pub enum Shape {
    #[serde(rename = "LineString")]
    Line(Path),
    /// One path per ring, the outer ring first.
    Polygon(Vec<Path>),
}

impl Shape {
    pub fn mode(&self) -> DrawMode {
        match self {
            Self::Line(_) => DrawMode::LineString,
            Self::Polygon(_) => DrawMode::Polygon,
        }
    }

    /// The line itself, or the rings of a polygon.
    pub fn paths(&self) -> &[Path] {
        match self {
            Self::Line(path) => std::slice::from_ref(path),
            Self::Polygon(rings) => rings,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.paths().iter().map(Path::len).sum()
    }

    pub fn to_wgs84(&self, projection: Projection) -> Self {
        match self {
            Self::Line(path) => Self::Line(path.to_wgs84(projection)),
            Self::Polygon(rings) => Self::Polygon(
                rings.iter().map(|ring| ring.to_wgs84(projection)).collect(),
            ),
        }
    }
}

impl ExampleData for Shape {
    fn example_data() -> Self {
        Shape::Polygon(vec![Path::new(vec![
            Coordinate::new(10.12, 54.32),
            Coordinate::new(10.15, 54.32),
            Coordinate::new(10.15, 54.34),
            Coordinate::new(10.12, 54.32),
        ])])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_line_string() {
        let shape: Shape = serde_json::from_str(
            r#"{"type": "LineString", "coordinates": [[0, 0], [1, 1]]}"#,
        )
        .unwrap();
        assert_eq!(shape.mode(), DrawMode::LineString);
        assert_eq!(shape.paths().len(), 1);
        assert_eq!(shape.vertex_count(), 2);
    }

    #[test]
    fn test_deserialize_polygon() {
        let shape: Shape = serde_json::from_str(
            r#"{
                "type": "Polygon",
                "coordinates": [
                    [[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]],
                    [[1, 1], [2, 1], [2, 2], [1, 1]]
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(shape.mode(), DrawMode::Polygon);
        assert_eq!(shape.paths().len(), 2);
        assert_eq!(shape.vertex_count(), 9);
    }

    #[test]
    fn test_serialize_line_string() {
        let shape = Shape::Line(Path::from(vec![(1.5, 2.5)]));
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "LineString", "coordinates": [[1.5, 2.5]]})
        );
    }

    #[test]
    fn test_unknown_geometry_type_is_rejected() {
        let result = serde_json::from_str::<Shape>(
            r#"{"type": "Circle", "coordinates": [0, 0]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_to_wgs84_keeps_ring_structure() {
        let shape = Shape::example_data();
        let projected = match &shape {
            Shape::Polygon(rings) => Shape::Polygon(
                rings
                    .iter()
                    .map(|ring| {
                        ring.coordinates()
                            .iter()
                            .map(|c| c.project(Projection::WebMercator))
                            .collect()
                    })
                    .collect(),
            ),
            Shape::Line(_) => unreachable!(),
        };

        let back = projected.to_wgs84(Projection::WebMercator);
        assert_eq!(back.mode(), DrawMode::Polygon);
        for (original, converted) in shape.paths()[0]
            .coordinates()
            .iter()
            .zip(back.paths()[0].coordinates())
        {
            assert!((original.longitude - converted.longitude).abs() < 1e-9);
            assert!((original.latitude - converted.latitude).abs() < 1e-9);
        }
    }
}
