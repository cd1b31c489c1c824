use annotation::{DrawingSession, MapView, SessionState};
use axum::{
    extract::{OriginalUri, State},
    http::Method,
    routing::{get, on, post},
    Json, Router,
};
use model::{
    coordinate::Coordinate,
    measurement::Measurement,
    report::Report,
    shape::{DrawMode, Shape},
    ExampleData,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    common::{
        route_not_found, schema, HateoasResult, RouteErrorResponse, METHOD_FILTER_ALL,
    },
    hateoas, SharedSession, WebState,
};

macro_rules! resource {
    ($($arg:tt)*) => {
        crate::api::v1::resource!("/session{}", format_args!($($arg)*))
    };
}

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<SessionDto>))
        .route("/map", get(get_map).put(attach_map).delete(detach_map))
        .route("/draw", post(start_draw))
        .route("/complete", post(complete_draw))
        .route("/close", post(close_report))
        .route("/reset", post(reset))
        .route("/", get(get_session))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionDto {
    pub state: SessionState,
    pub map: Option<MapView>,
    pub report_visible: bool,
    pub shape_count: usize,
    pub report: Report,
    /// Only set by the request that caused it.
    pub started: Option<bool>,
    /// Only set by the request that caused it.
    pub measurement: Option<Measurement>,
}

impl SessionDto {
    fn of(session: &DrawingSession) -> Self {
        Self {
            state: session.state(),
            map: session.map().cloned(),
            report_visible: session.is_report_visible(),
            shape_count: session.measurements().len(),
            report: session.report(),
            started: None,
            measurement: None,
        }
    }
}

impl ExampleData for SessionDto {
    fn example_data() -> Self {
        let measurement = Measurement::example_data();
        let report = Report::new([&measurement]);
        Self {
            state: SessionState::ShapeReady,
            map: Some(MapView::default()),
            report_visible: true,
            shape_count: 1,
            report,
            started: None,
            measurement: Some(measurement),
        }
    }
}

fn session_hateoas(dto: SessionDto) -> hateoas::Response<SessionDto> {
    hateoas::Response::new(dto)
        .link("self", resource!(""))
        .link("draw", resource!("/draw"))
        .link("complete", resource!("/complete"))
        .link("close", resource!("/close"))
        .link("reset", resource!("/reset"))
        .link("map", resource!("/map"))
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MapDto {
    #[serde(flatten)]
    pub view: MapView,
    /// `center` expressed in `projection`.
    pub projected_center: Coordinate,
    /// `false` while the session has no map and the configured default is
    /// returned instead.
    pub attached: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub(crate) struct DrawRequest {
    pub mode: DrawMode,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub(crate) struct CompleteRequest {
    /// In the projection of the attached map.
    pub geometry: Shape,
}

async fn get_session(
    State(session): State<SharedSession>,
) -> HateoasResult<SessionDto> {
    let session = session.lock().await;
    Ok(session_hateoas(SessionDto::of(&session)).json())
}

/// The map the page should show: the attached one, or a default view in the
/// configured projection before the page has attached its map.
async fn get_map(
    State(WebState { session, config }): State<WebState>,
) -> HateoasResult<MapDto> {
    let session = session.lock().await;
    let (view, attached) = match session.map() {
        Some(map) => (map.clone(), true),
        None => (MapView::new(config.projection), false),
    };
    let dto = MapDto {
        projected_center: view.projected_center(),
        view,
        attached,
    };
    Ok(hateoas::Response::new(dto)
        .link("self", resource!("/map"))
        .link("session", resource!(""))
        .json())
}

async fn attach_map(
    State(session): State<SharedSession>,
    Json(map): Json<MapView>,
) -> HateoasResult<SessionDto> {
    let mut session = session.lock().await;
    session.attach_map(map);
    Ok(session_hateoas(SessionDto::of(&session)).json())
}

async fn detach_map(
    State(session): State<SharedSession>,
) -> HateoasResult<SessionDto> {
    let mut session = session.lock().await;
    session.detach_map();
    Ok(session_hateoas(SessionDto::of(&session)).json())
}

async fn start_draw(
    State(session): State<SharedSession>,
    Json(request): Json<DrawRequest>,
) -> HateoasResult<SessionDto> {
    let mut session = session.lock().await;
    let started = session.start_draw(request.mode);
    let dto = SessionDto {
        started: Some(started),
        ..SessionDto::of(&session)
    };
    Ok(session_hateoas(dto).json())
}

async fn complete_draw(
    OriginalUri(original_uri): OriginalUri,
    State(session): State<SharedSession>,
    Json(request): Json<CompleteRequest>,
) -> HateoasResult<SessionDto> {
    let mut session = session.lock().await;
    let measurement = session
        .complete_draw(request.geometry)
        .map(Measurement::clone)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })?;
    let dto = SessionDto {
        measurement: Some(measurement),
        ..SessionDto::of(&session)
    };
    Ok(session_hateoas(dto).json())
}

async fn close_report(
    State(session): State<SharedSession>,
) -> HateoasResult<SessionDto> {
    let mut session = session.lock().await;
    session.close_report();
    Ok(session_hateoas(SessionDto::of(&session)).json())
}

async fn reset(State(session): State<SharedSession>) -> HateoasResult<SessionDto> {
    let mut session = session.lock().await;
    session.reset();
    Ok(session_hateoas(SessionDto::of(&session)).json())
}
