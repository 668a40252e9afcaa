use std::io::Read;

use crate::error::FetchError;

pub mod schema;

/// Remote API method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetAppList,
    GetNewsForApp,
    GetFriendList,
    GetGlobalStatsForGame,
    GetSchemaForGame,
    GetUserStatsForGame
}

impl Operation {
    #[inline]
    pub fn list() -> &'static [Operation] {
        &[
            Self::GetAppList,
            Self::GetNewsForApp,
            Self::GetFriendList,
            Self::GetGlobalStatsForGame,
            Self::GetSchemaForGame,
            Self::GetUserStatsForGame
        ]
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetAppList            => "GetAppList",
            Self::GetNewsForApp         => "GetNewsForApp",
            Self::GetFriendList         => "GetFriendList",
            Self::GetGlobalStatsForGame => "GetGlobalStatsForGame",
            Self::GetSchemaForGame      => "GetSchemaForGame",
            Self::GetUserStatsForGame   => "GetUserStatsForGame"
        }
    }

    /// Path of the method relative to the API host
    #[inline]
    pub fn path(&self) -> &'static str {
        match self {
            Self::GetAppList            => "/ISteamApps/GetAppList/v2",
            Self::GetNewsForApp         => "/ISteamNews/GetNewsForApp/v0002",
            Self::GetFriendList         => "/ISteamUser/GetFriendList/v1",
            Self::GetGlobalStatsForGame => "/ISteamUserStats/GetGlobalStatsForGame/v0001",
            Self::GetSchemaForGame      => "/ISteamUserStats/GetSchemaForGame/v2",
            Self::GetUserStatsForGame   => "/ISteamUserStats/GetUserStatsForGame/v2"
        }
    }

    /// Whether the method response is forwarded to the caller without parsing
    #[inline]
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::GetGlobalStatsForGame | Self::GetSchemaForGame | Self::GetUserStatsForGame)
    }

    /// Build request URL for this method
    ///
    /// Parameters are appended in the given order, values are percent-encoded
    pub fn url(&self, host: impl AsRef<str>, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", host.as_ref().trim_end_matches('/'), self.path());

        for (i, (name, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }
}

impl std::fmt::Display for Operation {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Response of the API which body wasn't read yet
///
/// Underlying connection is released when the response is dropped
pub struct Response {
    pub status: i32,
    pub reason: String,
    pub body: Box<dyn Read>
}

impl Response {
    /// Whether this request was successful or not
    ///
    /// By successful it means that the status code is in range of 200-299
    #[inline]
    pub fn is_ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Turn non-2xx response into an error
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_ok() {
            Ok(self)
        }

        else {
            Err(FetchError::Status {
                code: self.status,
                reason: self.reason
            })
        }
    }
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

/// Blocking HTTP GET capability used by the client
pub trait Transport {
    /// Send GET request to the given URL
    ///
    /// `timeout` is amount of seconds
    fn get(&self, url: &str, timeout: u64) -> Result<Response, FetchError>;
}

/// Default `Transport` implementation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinreqTransport {
    proxy: Option<String>
}

impl MinreqTransport {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Send all the requests through the given proxy
    ///
    /// Format is `[http://][user[:password]@]host[:port]`
    #[inline]
    pub fn with_proxy(self, proxy: impl Into<String>) -> Self {
        Self {
            proxy: Some(proxy.into())
        }
    }

    #[inline]
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }
}

impl Transport for MinreqTransport {
    // URL is skipped because it contains the access key
    #[tracing::instrument(level = "trace", skip(url))]
    fn get(&self, url: &str, timeout: u64) -> Result<Response, FetchError> {
        let mut request = minreq::get(url)
            .with_timeout(timeout);

        if let Some(proxy) = &self.proxy {
            request = request.with_proxy(minreq::Proxy::new(proxy)?);
        }

        let response = request.send_lazy()?;

        tracing::trace!(status = response.status_code, "Received response");

        Ok(Response {
            status: response.status_code,
            reason: response.reason_phrase.clone(),
            body: Box::new(response)
        })
    }
}
