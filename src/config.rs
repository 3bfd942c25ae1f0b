use std::{env, net::SocketAddr};

use url::Url;

use crate::error::AppError;

const DEFAULT_SEARCH_API_URL: &str =
    "https://z0qw1e7jpd.execute-api.eu-west-1.amazonaws.com/default/trips";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub search_api_url: Url,
    pub search_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://trips.db".to_string());
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let search_api_url: Url = env::var("TRIPS_API_URL")
            .unwrap_or_else(|_| DEFAULT_SEARCH_API_URL.to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid TRIPS_API_URL: {err}")))?;

        let search_api_key = env::var("TRIPS_API_KEY")
            .map_err(|_| AppError::Config("TRIPS_API_KEY must be set".to_string()))?;

        Ok(Self {
            database_url,
            listen_addr,
            search_api_url,
            search_api_key,
        })
    }
}
