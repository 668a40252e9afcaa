use std::collections::VecDeque;
use std::io::{Read, Write, ErrorKind};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::prelude::*;

mod cache;

pub const TEST_KEY: &str = "0123456789ABCDEF";
pub const TEST_HOST: &str = "http://api.test";

/// Canned reply of the `MockTransport`
pub enum Reply {
    Body(i32, Vec<u8>),

    /// Connection couldn't be established
    Refused,

    /// Body which fails after returning given bytes
    Broken(Vec<u8>)
}

impl Reply {
    #[inline]
    pub fn ok(body: impl AsRef<[u8]>) -> Self {
        Self::Body(200, body.as_ref().to_vec())
    }
}

/// Transport which returns queued replies and records requested URLs
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<(String, u64)>>
}

impl MockTransport {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new())
        }
    }

    pub fn push(&self, reply: Reply) {
        self.replies.lock().push_back(reply);
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.lock().iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_timeout(&self) -> Option<u64> {
        self.requests.lock().last().map(|(_, timeout)| *timeout)
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str, timeout: u64) -> Result<Response, FetchError> {
        self.requests.lock().push((url.to_string(), timeout));

        // Unexpected requests are treated as unreachable host
        let reply = self.replies.lock().pop_front().unwrap_or(Reply::Refused);

        match reply {
            Reply::Body(status, body) => Ok(Response {
                status,
                reason: String::from(if (200..=299).contains(&status) { "OK" } else { "Error" }),
                body: Box::new(std::io::Cursor::new(body))
            }),

            Reply::Refused => Err(FetchError::Io(ErrorKind::ConnectionRefused.into())),

            Reply::Broken(head) => Ok(Response {
                status: 200,
                reason: String::from("OK"),
                body: Box::new(std::io::Cursor::new(head).chain(BrokenReader))
            })
        }
    }
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(ErrorKind::ConnectionReset.into())
    }
}

/// Output which refuses to accept any data
pub struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Client with mocked transport and its own app list cache
pub fn mock_client(replies: impl IntoIterator<Item = Reply>) -> Client<MockTransport> {
    Client::new(TEST_KEY)
        .with_api_host(TEST_HOST)
        .with_cache(Arc::new(AppListCache::new()))
        .with_transport(MockTransport::new(replies))
}
