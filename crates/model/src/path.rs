use itertools::Itertools;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::geo::round_to;

use crate::coordinate::{Coordinate, Projection};

/// Distance between two consecutive path vertices in kilometers, rounded to
/// two decimal places.
pub type SegmentDistance = f64;

/// Decimal places distances are reported with.
pub const DISTANCE_DECIMALS: u32 = 2;

/// An ordered list of coordinates. Either a whole line or one polygon ring.
///
/// The order of the coordinates defines which vertices are adjacent. Rings
/// are taken as drawn: a closed ring repeats its first vertex at the end, and
/// that closing edge is measured like any other segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Path {
    coordinates: Vec<Coordinate>,
}

impl Path {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn to_wgs84(&self, projection: Projection) -> Self {
        self.coordinates
            .iter()
            .map(|coordinate| coordinate.to_wgs84(projection))
            .collect()
    }

    /// Great-circle distance of every pair of consecutive vertices.
    ///
    /// A path of `n` vertices yields `n - 1` distances, none for less than
    /// two vertices. The coordinates have to be WGS84.
    pub fn segment_distances(&self) -> Vec<SegmentDistance> {
        self.coordinates
            .iter()
            .tuple_windows()
            .map(|(from, to)| round_to(from.distance_km(to), DISTANCE_DECIMALS))
            .collect()
    }
}

/// Sum of already rounded segment distances, so that the total matches the
/// numbers listed next to the vertices.
pub fn total_distance(distances: &[SegmentDistance]) -> f64 {
    round_to(distances.iter().sum(), DISTANCE_DECIMALS)
}

impl FromIterator<Coordinate> for Path {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Coordinate>> for Path {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self::new(coordinates)
    }
}

impl From<Vec<(f64, f64)>> for Path {
    fn from(points: Vec<(f64, f64)>) -> Self {
        points.into_iter().map(Coordinate::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_has_no_segments() {
        assert!(Path::default().segment_distances().is_empty());
    }

    #[test]
    fn test_single_vertex_has_no_segments() {
        let path = Path::from(vec![(10.0, 54.0)]);
        assert!(path.segment_distances().is_empty());
    }

    #[test]
    fn test_one_segment_less_than_vertices() {
        let path = Path::from(vec![
            (0.0, 0.0),
            (0.5, 0.5),
            (1.0, 0.0),
            (2.0, 3.0),
            (-4.0, 7.5),
        ]);
        assert_eq!(path.segment_distances().len(), path.len() - 1);
    }

    #[test]
    fn test_identical_vertices() {
        let path = Path::from(vec![(10.13, 54.32), (10.13, 54.32)]);
        assert_eq!(path.segment_distances(), vec![0.0]);
    }

    #[test]
    fn test_one_degree_along_meridian() {
        let path = Path::from(vec![(0.0, 0.0), (0.0, 1.0)]);
        assert_eq!(path.segment_distances(), vec![111.19]);
    }

    #[test]
    fn test_one_degree_along_equator() {
        let path = Path::from(vec![(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(path.segment_distances(), vec![111.19]);
    }

    #[test]
    fn test_segment_order_follows_vertex_order() {
        let path = Path::from(vec![(0.0, 0.0), (0.0, 1.0), (0.0, 3.0)]);
        assert_eq!(path.segment_distances(), vec![111.19, 222.39]);
    }

    #[test]
    fn test_calculation_is_repeatable() {
        let path = Path::from(vec![(8.68, 50.11), (13.40, 52.52), (9.99, 53.55)]);
        assert_eq!(path.segment_distances(), path.segment_distances());
    }

    #[test]
    fn test_out_of_range_values_are_not_rejected() {
        let path = Path::from(vec![(0.0, 0.0), (360.0, 0.0)]);
        let distances = path.segment_distances();
        assert_eq!(distances.len(), 1);
        assert!(distances[0].abs() < 0.01);
    }

    #[test]
    fn test_total_sums_rounded_segments() {
        // 0.004 + 0.004 would round to 0.01 in one piece
        let path = Path::from(vec![
            (0.0, 0.0),
            (0.000_036, 0.0),
            (0.000_072, 0.0),
        ]);
        let distances = path.segment_distances();
        assert_eq!(distances, vec![0.0, 0.0]);
        assert_eq!(total_distance(&distances), 0.0);
    }

    #[test]
    fn test_total_of_square_ring() {
        let ring = Path::from(vec![
            (0.0, 0.0),
            (0.9, 0.0),
            (0.9, 0.9),
            (0.0, 0.9),
            (0.0, 0.0),
        ]);
        let distances = ring.segment_distances();
        assert_eq!(distances.len(), 4);
        for distance in &distances {
            assert!((distance - 100.0).abs() < 0.1, "{distance}");
        }

        let expected = round_to(distances.iter().sum(), 2);
        assert_eq!(total_distance(&distances), expected);
        assert!((expected - 400.0).abs() < 0.5);
    }

    #[test]
    fn test_deserialize_from_nested_arrays() {
        let path: Path = serde_json::from_str("[[1.0, 2.0], [3.0, 4.0]]").unwrap();
        assert_eq!(
            path.coordinates(),
            &[Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)]
        );
    }
}
