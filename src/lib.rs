pub mod consts;
pub mod api;
pub mod cache;
pub mod client;
pub mod error;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::consts::*;
    pub use super::api::{Operation, Transport, MinreqTransport, Response};
    pub use super::api::schema::{App, NewsItem, Friend};
    pub use super::cache::AppListCache;
    pub use super::client::Client;
    pub use super::error::{Error, FetchError};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the default requests timeout, in seconds
pub const REQUESTS_TIMEOUT_ENV: &str = "STEAM_API_REQUESTS_TIMEOUT";

lazy_static::lazy_static! {
    /// Default timeout for all the API requests, in seconds
    pub static ref REQUESTS_TIMEOUT: u64 = std::env::var(REQUESTS_TIMEOUT_ENV).ok()
        .and_then(|timeout| timeout.trim().parse().ok())
        .unwrap_or(8);
}
