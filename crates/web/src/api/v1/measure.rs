use axum::{
    extract::State,
    routing::{get, on, post},
    Json, Router,
};
use model::{
    coordinate::Projection, measurement::Measurement, report::Report, shape::Shape,
    ExampleData,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    common::{route_not_found, schema, HateoasResult, METHOD_FILTER_ALL},
    hateoas, WebState,
};

macro_rules! resource {
    ($($arg:tt)*) => {
        crate::api::v1::resource!("/measure{}", format_args!($($arg)*))
    };
}

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<MeasureDto>))
        .route("/", post(measure))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MeasureRequest {
    /// Projection of `geometry`. Defaults to the projection of the map page.
    #[serde(default)]
    pub projection: Option<Projection>,
    pub geometry: Shape,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MeasureDto {
    /// Projection the request geometry was read in.
    pub projection: Projection,
    pub measurement: Measurement,
    pub report: Report,
}

impl ExampleData for MeasureDto {
    fn example_data() -> Self {
        let measurement = Measurement::example_data();
        let report = Report::new([&measurement]);
        Self {
            projection: Projection::Wgs84,
            measurement,
            report,
        }
    }
}

/// Measures a geometry without touching the drawing session.
async fn measure(
    State(WebState { config, .. }): State<WebState>,
    Json(request): Json<MeasureRequest>,
) -> HateoasResult<MeasureDto> {
    let projection = request.projection.unwrap_or(config.projection);
    let measurement = Measurement::of_projected(&request.geometry, projection);
    let report = Report::new([&measurement]);
    let dto = MeasureDto {
        projection,
        measurement,
        report,
    };
    Ok(hateoas::Response::new(dto)
        .link("self", resource!(""))
        .link("schema", resource!("/schema"))
        .json())
}
