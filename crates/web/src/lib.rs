pub use crate::common::RouteResult;

use std::sync::Arc;

use annotation::DrawingSession;
use axum::{extract::FromRef, routing::get_service, Router};
use tokio::{net::TcpListener, sync::Mutex};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::WebConfig;

pub mod api;
pub mod common;
pub mod config;
pub mod hateoas;

/// The page talks to a single session; there is no per-user state.
pub type SharedSession = Arc<Mutex<DrawingSession>>;

#[derive(Clone, FromRef)]
pub struct WebState {
    pub session: SharedSession,
    pub config: Arc<WebConfig>,
}

impl WebState {
    pub fn new(config: WebConfig) -> Self {
        Self {
            session: Arc::new(Mutex::new(DrawingSession::new())),
            config: Arc::new(config),
        }
    }
}

pub async fn start_web_server(state: WebState) -> std::io::Result<()> {
    let routes = Router::new()
        .nest_service("/api", api::routes(state.clone()))
        .fallback_service(static_content_router(&state.config));

    let listener = TcpListener::bind(&state.config.bind_address).await?;
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}

fn static_content_router(config: &WebConfig) -> Router {
    Router::new().nest_service(
        "/",
        get_service(
            ServeDir::new(&config.www_dir).not_found_service(ServeFile::new(
                config.www_dir.join("error404.html"),
            )),
        ),
    )
}
