use std::{env, path::PathBuf};

use model::coordinate::{ParseProjectionError, Projection};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_WWW_DIR: &str = "./resources/www/";

#[derive(Debug, Clone, PartialEq)]
pub struct WebConfig {
    pub bind_address: String,
    /// Directory the map page is served from.
    pub www_dir: PathBuf,
    /// Projection offered to the map page before it attaches its map, and
    /// assumed for `/measure` requests that do not name one.
    pub projection: Projection,
}

impl WebConfig {
    /// Reads `MAP_ANNOTATION_BIND`, `MAP_ANNOTATION_WWW` and
    /// `MAP_ANNOTATION_PROJECTION`, falling back to the defaults for unset
    /// variables.
    pub fn from_env() -> Result<Self, ParseProjectionError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`WebConfig::from_env`], with the variables taken from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ParseProjectionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(bind_address) = lookup("MAP_ANNOTATION_BIND") {
            config.bind_address = bind_address;
        }
        if let Some(www_dir) = lookup("MAP_ANNOTATION_WWW") {
            config.www_dir = PathBuf::from(www_dir);
        }
        if let Some(projection) = lookup("MAP_ANNOTATION_PROJECTION") {
            config.projection = projection.parse()?;
        }
        Ok(config)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_owned(),
            www_dir: PathBuf::from(DEFAULT_WWW_DIR),
            projection: Projection::WebMercator,
        }
    }
}
