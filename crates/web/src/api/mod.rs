use axum::{
    response::IntoResponse,
    routing::{get, on},
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

pub mod v1;

use crate::{
    common::{route_not_found, METHOD_FILTER_ALL},
    WebState,
};

macro_rules! resource {
    ($($arg:tt)*) => {
        format!("/api{}", format_args!($($arg)*))
    };
}
pub(crate) use resource;

pub fn routes(state: WebState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .nest_service("/v1", v1::routes(state))
        .layer(TraceLayer::new_for_http())
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn ping() -> impl IntoResponse {
    Json(json!({
        "message": "pong!"
    }))
}

#[cfg(test)]
mod tests {
    use model::{coordinate::Projection, path::Path, shape::Shape};
    use reqwest::StatusCode;
    use serde_json::Value;
    use tokio::net::TcpListener;

    use super::*;
    use crate::config::WebConfig;

    /// Serves the api on a free local port and returns its base url.
    async fn serve() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let app = Router::new()
            .nest_service("/api", routes(WebState::new(WebConfig::default())));
        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service()).await.unwrap();
        });
        format!("http://{}", address)
    }

    fn client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let base_url = serve().await;
        let response = client()
            .get(format!("{}/api/ping", base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"message": "pong!"}));
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_not_found() {
        let base_url = serve().await;
        let response = client()
            .get(format!("{}/api/v1/nope", base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["requestedUri"], "/api/v1/nope");
        assert_eq!(body["httpMethod"], "GET");
        assert_eq!(body["message"], "Not Found");
    }

    #[tokio::test]
    async fn test_measure_through_router() {
        let base_url = serve().await;
        let body = json!({
            "projection": Projection::Wgs84,
            "geometry": Shape::Line(Path::from(vec![(0.0, 0.0), (0.0, 1.0)])),
        });
        let response = client()
            .post(format!("{}/api/v1/measure", base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["measurement"]["paths"][0]["distancesKm"], json!([111.19]));
        assert_eq!(body["links"][0]["href"], "/api/v1/measure");
    }

    #[tokio::test]
    async fn test_session_through_router() {
        let base_url = serve().await;
        let response = client()
            .get(format!("{}/api/v1/session", base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["state"], json!({"state": "Idle"}));
        assert_eq!(body["reportVisible"], false);
    }
}
