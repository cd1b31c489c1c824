use web::{config::WebConfig, start_web_server, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config =
        WebConfig::from_env().expect("expected a valid configuration in env.");
    log::info!(
        "serving map page from {} on {} ({})",
        config.www_dir.display(),
        config.bind_address,
        config.projection
    );

    let web_future = start_web_server(WebState::new(config));

    if let Err(why) = web_future.await {
        log::error!("web server stopped: {}", why);
    }
}
