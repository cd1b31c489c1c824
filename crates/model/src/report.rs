use std::fmt;

use itertools::Itertools;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    coordinate::Coordinate,
    measurement::{Measurement, PathMeasurement},
    shape::Shape,
    ExampleData,
};

/// The text listing of one line or one polygon ring.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    pub title: String,
    /// One entry per vertex, e.g. `WP(03): [10.122800, 54.323300] -> 1.27 km`.
    /// The last vertex has no distance.
    pub waypoints: Vec<String>,
    /// Only present for polygon rings, e.g. `Total: 4.81 km`.
    pub total: Option<String>,
    /// Waypoints and total on one line, separated by ` | `.
    pub inline: String,
}

impl ReportSection {
    fn new(
        title: String,
        coordinates: &[Coordinate],
        measured: &PathMeasurement,
        with_total: bool,
    ) -> Self {
        let waypoints: Vec<String> = coordinates
            .iter()
            .enumerate()
            .map(|(index, coordinate)| {
                waypoint(index, coordinate, measured.distances_km.get(index))
            })
            .collect();
        let total =
            with_total.then(|| format!("Total: {:.2} km", measured.total_km));
        let inline = waypoints.iter().chain(total.as_ref()).join(" | ");
        Self {
            title,
            waypoints,
            total,
            inline,
        }
    }
}

fn waypoint(
    index: usize,
    coordinate: &Coordinate,
    distance_km: Option<&f64>,
) -> String {
    match distance_km {
        Some(distance) => format!("WP({index:02}): {coordinate} -> {distance:.2} km"),
        None => format!("WP({index:02}): {coordinate}"),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Lists the given measurements in order, numbering shapes from 1.
    pub fn new<'a, I>(measurements: I) -> Self
    where
        I: IntoIterator<Item = &'a Measurement>,
    {
        let sections = measurements
            .into_iter()
            .enumerate()
            .flat_map(|(index, measurement)| sections_of(index + 1, measurement))
            .collect();
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

fn sections_of(number: usize, measurement: &Measurement) -> Vec<ReportSection> {
    let is_polygon = matches!(measurement.shape, Shape::Polygon(_));
    measurement
        .shape
        .paths()
        .iter()
        .zip(&measurement.paths)
        .enumerate()
        .map(|(ring, (path, measured))| {
            let title = if is_polygon {
                format!("Polygon #{number}, ring {ring}")
            } else {
                format!("LineString #{number}")
            };
            ReportSection::new(title, path.coordinates(), measured, is_polygon)
        })
        .collect()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "{}", section.title)?;
            for waypoint in &section.waypoints {
                writeln!(f, "  {waypoint}")?;
            }
            if let Some(total) = &section.total {
                writeln!(f, "  {total}")?;
            }
        }
        Ok(())
    }
}

impl ExampleData for Report {
    fn example_data() -> Self {
        Report::new([&Measurement::example_data()])
    }
}
