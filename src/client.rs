use std::io::{Read, Write, ErrorKind};
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::consts::*;
use crate::api::{Operation, Transport, MinreqTransport, Response};
use crate::api::schema::*;
use crate::cache::AppListCache;
use crate::error::Error;

/// Size of the buffer used to copy raw responses, in bytes
pub const RAW_CHUNK_SIZE: usize = 1024 * 16;

/// Steam Web API client
///
/// Every method performs one blocking GET request. The access key is sent
/// as the `key` query parameter of each of them
#[derive(Clone)]
pub struct Client<T = MinreqTransport> {
    key: String,
    api_host: String,
    timeout: u64,
    transport: T,
    cache: Arc<AppListCache>
}

impl Client {
    /// Create new client which shares the process-wide app list cache
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            api_host: DEFAULT_API_HOST.to_string(),
            timeout: *crate::REQUESTS_TIMEOUT,
            transport: MinreqTransport::new(),
            cache: AppListCache::shared()
        }
    }

    /// Create new client using `STEAM_API_KEY` and optional `STEAM_API_HOST` variables
    ///
    /// Return `None` if the key is not set or empty
    pub fn from_env() -> Option<Self> {
        let key = std::env::var(API_KEY_ENV).ok()
            .filter(|key| !key.trim().is_empty())?;

        let client = Self::new(key.trim());

        match std::env::var(API_HOST_ENV) {
            Ok(host) if !host.trim().is_empty() => Some(client.with_api_host(host.trim())),
            _ => Some(client)
        }
    }

    /// Send all the requests through the given proxy
    #[inline]
    pub fn with_proxy(self, proxy: impl Into<String>) -> Self {
        let transport = self.transport.clone().with_proxy(proxy);

        self.with_transport(transport)
    }
}

impl<T: Transport> Client<T> {
    /// Replace the HTTP transport used to perform requests
    pub fn with_transport<N: Transport>(self, transport: N) -> Client<N> {
        Client {
            key: self.key,
            api_host: self.api_host,
            timeout: self.timeout,
            transport,
            cache: self.cache
        }
    }

    #[inline]
    pub fn with_api_host(self, api_host: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            ..self
        }
    }

    /// Set requests timeout, in seconds
    #[inline]
    pub fn with_timeout(self, timeout: u64) -> Self {
        Self {
            timeout,
            ..self
        }
    }

    /// Use the given app list cache instead of the process-wide one
    #[inline]
    pub fn with_cache(self, cache: Arc<AppListCache>) -> Self {
        Self {
            cache,
            ..self
        }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    #[inline]
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[inline]
    pub fn cache(&self) -> &Arc<AppListCache> {
        &self.cache
    }

    /// Forget cached app list. Affects every client sharing the same cache
    #[inline]
    pub fn invalidate_app_list_cache(&self) {
        self.cache.invalidate();
    }

    /// Get list of all the applications
    ///
    /// Cached list is returned without any request unless `force` is set.
    /// Fetched list always replaces the cached one, failed requests keep it untouched
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn get_app_list(&self, force: bool) -> Result<Arc<[App]>, Error> {
        self.cache.get_or_try_fetch(force, || {
            tracing::trace!("Fetching app list");

            let response: AppListResponse = self.get_json(Operation::GetAppList, &[])?;

            tracing::debug!(count = response.applist.apps.len(), "Fetched app list");

            Ok(response.applist.apps)
        })
    }

    /// Get news posted for the given app
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn get_news_for_app(&self, app_id: u32) -> Result<Vec<NewsItem>, Error> {
        tracing::trace!("Fetching app news");

        let response: AppNewsResponse = self.get_json(Operation::GetNewsForApp, &[
            ("appid", app_id.to_string().as_str())
        ])?;

        tracing::debug!(count = response.appnews.news_items.len(), "Fetched app news");

        Ok(response.appnews.news_items)
    }

    /// Get relationships of the given user
    ///
    /// `relationship` filters returned entries, e.g. `RELATIONSHIP_ALL` or `RELATIONSHIP_FRIEND`
    #[tracing::instrument(level = "trace", skip_all, fields(
        steam_id = steam_id.as_ref(),
        relationship = relationship.as_ref()
    ))]
    pub fn get_friend_list(&self, steam_id: impl AsRef<str>, relationship: impl AsRef<str>) -> Result<Vec<Friend>, Error> {
        tracing::trace!("Fetching friend list");

        let response: FriendsListResponse = self.get_json(Operation::GetFriendList, &[
            ("steamid", steam_id.as_ref()),
            ("relationship", relationship.as_ref())
        ])?;

        tracing::debug!(count = response.friendslist.friends.len(), "Fetched friend list");

        Ok(response.friendslist.friends)
    }

    /// Write global stats of the given app to the `output`
    ///
    /// Response body is copied as is without parsing. Return amount of written bytes
    #[tracing::instrument(level = "trace", skip(self, output))]
    pub fn get_global_stats_for_game(&self, app_id: u32, output: impl Write) -> Result<u64, Error> {
        self.copy_raw(Operation::GetGlobalStatsForGame, &[
            ("appid", app_id.to_string().as_str()),
            ("count", GLOBAL_STATS_COUNT.to_string().as_str())
        ], output)
    }

    /// Write stats schema of the given app to the `output`
    ///
    /// Response body is copied as is without parsing. Return amount of written bytes
    #[tracing::instrument(level = "trace", skip(self, output))]
    pub fn get_schema_for_game(&self, app_id: u32, output: impl Write) -> Result<u64, Error> {
        self.copy_raw(Operation::GetSchemaForGame, &[
            ("appid", app_id.to_string().as_str())
        ], output)
    }

    /// Write stats of the given user in the given app to the `output`
    ///
    /// Response body is copied as is without parsing. Return amount of written bytes
    #[tracing::instrument(level = "trace", skip(self, output))]
    pub fn get_user_stats_for_game(&self, steam_id: u64, app_id: u32, output: impl Write) -> Result<u64, Error> {
        self.copy_raw(Operation::GetUserStatsForGame, &[
            ("steamid", steam_id.to_string().as_str()),
            ("appid", app_id.to_string().as_str())
        ], output)
    }

    fn request(&self, operation: Operation, params: &[(&str, &str)]) -> Result<Response, Error> {
        let mut query = Vec::with_capacity(params.len() + 1);

        query.push(("key", self.key.as_str()));
        query.extend_from_slice(params);

        let url = operation.url(&self.api_host, &query);

        let response = self.transport.get(&url, self.timeout)
            .and_then(Response::error_for_status)
            .map_err(|err| Error::fetch(operation, err))?;

        Ok(response)
    }

    fn get_json<R: DeserializeOwned>(&self, operation: Operation, params: &[(&str, &str)]) -> Result<R, Error> {
        let mut response = self.request(operation, params)?;
        let mut body = Vec::new();

        response.body.read_to_end(&mut body)
            .map_err(|err| Error::fetch(operation, err))?;

        serde_json::from_slice(&body)
            .map_err(|source| Error::Decode { operation, source })
    }

    fn copy_raw(&self, operation: Operation, params: &[(&str, &str)], mut output: impl Write) -> Result<u64, Error> {
        tracing::trace!("Fetching raw response");

        let mut response = self.request(operation, params)?;

        let mut buf = vec![0; RAW_CHUNK_SIZE];
        let mut written = 0;

        loop {
            let read = match response.body.read(&mut buf) {
                Ok(0) => break,
                Ok(read) => read,

                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(Error::fetch(operation, err))
            };

            output.write_all(&buf[..read])
                .map_err(|source| Error::Write { operation, source })?;

            written += read as u64;
        }

        output.flush().map_err(|source| Error::Write { operation, source })?;

        tracing::debug!(written, "Copied raw response");

        Ok(written)
    }
}

impl<T> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("key", &"<hidden>")
            .field("api_host", &self.api_host)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
