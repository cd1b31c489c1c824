use std::{error, fmt};

use model::{
    measurement::Measurement,
    report::Report,
    shape::{DrawMode, Shape},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::map::MapView;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(tag = "state", content = "mode")]
pub enum SessionState {
    /// Nothing is being drawn.
    #[default]
    Idle,
    /// A drawing of the given kind is in progress on the map.
    Drawing(DrawMode),
    /// A drawing was just finished and its report is up.
    ShapeReady,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A drawing was completed although none was started.
    NotDrawing { state: SessionState },
    /// The finished geometry is not what the drawing was started for.
    ModeMismatch {
        expected: DrawMode,
        actual: DrawMode,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDrawing { state } => {
                write!(f, "no drawing in progress (session is {:?})", state)
            }
            Self::ModeMismatch { expected, actual } => {
                write!(f, "expected a {} but got a {}", expected, actual)
            }
        }
    }
}

impl error::Error for SessionError {}

pub type Result<T> = std::result::Result<T, SessionError>;

/// State of one user drawing on one map.
///
/// Finished shapes pile up until [`DrawingSession::reset`] is called, so the
/// report always lists everything drawn since the last reset. Nothing is kept
/// beyond the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    map: Option<MapView>,
    state: SessionState,
    measurements: Vec<Measurement>,
    report_visible: bool,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_map(map: MapView) -> Self {
        Self {
            map: Some(map),
            ..Self::default()
        }
    }

    pub fn attach_map(&mut self, map: MapView) {
        log::debug!("map attached ({})", map.projection);
        self.map = Some(map);
    }

    /// Removes the map. A drawing in progress is abandoned.
    pub fn detach_map(&mut self) -> Option<MapView> {
        if let SessionState::Drawing(mode) = self.state {
            log::debug!("map detached, abandoning {} drawing", mode);
            self.state = SessionState::Idle;
        }
        self.map.take()
    }

    pub fn map(&self) -> Option<&MapView> {
        self.map.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_report_visible(&self) -> bool {
        self.report_visible
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Starts drawing a geometry of the given kind.
    ///
    /// Does nothing and returns `false` while no map is attached. Starting
    /// while already drawing switches to the new mode.
    pub fn start_draw(&mut self, mode: DrawMode) -> bool {
        if self.map.is_none() {
            log::debug!("no map attached, ignoring start of {} drawing", mode);
            return false;
        }
        if let SessionState::Drawing(previous) = self.state {
            log::debug!("switching drawing from {} to {}", previous, mode);
        }
        self.state = SessionState::Drawing(mode);
        true
    }

    /// Finishes the drawing in progress with the geometry the map produced.
    ///
    /// The geometry is expected in the projection of the attached map. It is
    /// converted to WGS84, measured and added to the session, and the report
    /// is shown.
    pub fn complete_draw(&mut self, geometry: Shape) -> Result<&Measurement> {
        let SessionState::Drawing(expected) = self.state else {
            log::warn!("rejected geometry, session is {:?}", self.state);
            return Err(SessionError::NotDrawing { state: self.state });
        };
        let actual = geometry.mode();
        if actual != expected {
            log::warn!("rejected {} geometry while drawing {}", actual, expected);
            return Err(SessionError::ModeMismatch { expected, actual });
        }
        let projection = self
            .map
            .as_ref()
            .map(|map| map.projection)
            .unwrap_or_default();

        let measurement = Measurement::of_projected(&geometry, projection);
        log::info!(
            "{} completed: {} vertices, {} path(s)",
            actual,
            measurement.shape.vertex_count(),
            measurement.paths.len()
        );

        let index = self.measurements.len();
        self.measurements.push(measurement);
        self.report_visible = true;
        self.state = SessionState::ShapeReady;
        Ok(&self.measurements[index])
    }

    /// Hides the report. The drawn shapes stay in the session.
    pub fn close_report(&mut self) {
        self.report_visible = false;
        if self.state == SessionState::ShapeReady {
            self.state = SessionState::Idle;
        }
    }

    /// Drops every drawn shape and goes back to idle.
    pub fn reset(&mut self) {
        log::debug!("reset, discarding {} shape(s)", self.measurements.len());
        self.measurements.clear();
        self.report_visible = false;
        self.state = SessionState::Idle;
    }

    pub fn report(&self) -> Report {
        Report::new(&self.measurements)
    }
}
