use crate::api::Operation;

/// Failure to get a usable response from the API
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to send request: {0}")]
    Transport(#[from] minreq::Error),

    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    /// API responded with a non-2xx status
    #[error("API responded with status {code} {reason}")]
    Status {
        code: i32,
        reason: String
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to fetch {operation}: {source}")]
    Fetch {
        operation: Operation,

        #[source]
        source: FetchError
    },

    /// Response body is not valid JSON or doesn't match the expected shape
    #[error("Failed to parse {operation} response: {source}")]
    Decode {
        operation: Operation,

        #[source]
        source: serde_json::Error
    },

    /// Raw response body couldn't be written to the output
    #[error("Failed to write {operation} response: {source}")]
    Write {
        operation: Operation,

        #[source]
        source: std::io::Error
    }
}

impl Error {
    #[inline]
    pub fn fetch(operation: Operation, source: impl Into<FetchError>) -> Self {
        Self::Fetch {
            operation,
            source: source.into()
        }
    }

    /// Operation which caused this error
    #[inline]
    pub fn operation(&self) -> Operation {
        match self {
            Self::Fetch { operation, .. } |
            Self::Decode { operation, .. } |
            Self::Write { operation, .. } => *operation
        }
    }

    #[inline]
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    #[inline]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// HTTP status of the response if the API rejected the request
    pub fn status(&self) -> Option<i32> {
        match self {
            Self::Fetch { source: FetchError::Status { code, .. }, .. } => Some(*code),
            _ => None
        }
    }
}
