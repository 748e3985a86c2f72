//! Server configuration from command-line flags and environment.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use clap::Parser;

/// Appberry backend server
#[derive(Parser, Debug, Clone)]
#[command(name = "appberry-api")]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8787)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// SQLite database file (`:memory:` for a throwaway database)
    #[arg(long = "database", env = "DATABASE_PATH", default_value = "appberry.db")]
    pub database: PathBuf,

    /// Directory of frontend assets served for non-API paths
    #[arg(long, env = "STATIC_DIR", default_value = "web")]
    pub static_dir: PathBuf,

    /// Origin allowed to make credentialed cross-origin requests
    #[arg(
        long,
        env = "CORS_ORIGIN",
        default_value = "http://localhost:5173",
        value_parser = parse_origin
    )]
    pub cors_origin: HeaderValue,

    /// Log filter (trace, debug, info, warn, error or an `EnvFilter` directive)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// Address the listener binds to.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Origins end up verbatim in `Access-Control-Allow-Origin`
fn parse_origin(value: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(value)
}
