//! An in-memory [`Transport`] for tests.
//!
//! [`MockTransport`] answers requests from a list of expectations and records
//! every request it receives, so that tests can check the exact verb, URL,
//! headers and body produced for a call without any network.
//!
//! ```rust
//! use http::Method;
//! use restbind_core::RestResponse;
//! use restbind_core::test_transport::MockTransport;
//!
//! let transport = MockTransport::new()
//!     .expect(Method::GET, "http://127.0.0.1/users/1", RestResponse::ok(r#"{"id":1}"#))
//!     .expect_any(RestResponse::ok("null"));
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use http::Method;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::transport::{RestRequest, RestResponse, Transport};

/// A strict, cloneable, in-memory transport.
///
/// Clones share their expectations and recorded requests.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    expectations: Vec<Expectation>,
    requests: Vec<RestRequest>,
}

#[derive(Debug)]
struct Expectation {
    method: Option<Method>,
    url: Option<String>,
    reply: Reply,
}

#[derive(Debug)]
enum Reply {
    Respond(RestResponse),
    Pending,
}

/// Errors raised by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum MockError {
    /// No expectation matches the request.
    #[display("Unexpected request {method} {url}")]
    Unexpected {
        /// Request method.
        method: Method,
        /// Request URL.
        url: String,
    },

    /// The cancellation token fired.
    #[display("Request cancelled")]
    Cancelled,
}

impl MockTransport {
    /// Creates a transport without expectations: every request fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers one request with `method` and `url` with `response`.
    pub fn expect(self, method: Method, url: impl Into<String>, response: RestResponse) -> Self {
        self.push(Expectation {
            method: Some(method),
            url: Some(url.into()),
            reply: Reply::Respond(response),
        })
    }

    /// Answers one request, whatever it is, with `response`.
    pub fn expect_any(self, response: RestResponse) -> Self {
        self.push(Expectation {
            method: None,
            url: None,
            reply: Reply::Respond(response),
        })
    }

    /// Holds one request until its cancellation token fires.
    pub fn expect_pending(self) -> Self {
        self.push(Expectation {
            method: None,
            url: None,
            reply: Reply::Pending,
        })
    }

    fn push(self, expectation: Expectation) -> Self {
        self.state().expectations.push(expectation);
        self
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RestRequest> {
        self.state().requests.clone()
    }

    /// Number of expectations not consumed yet.
    pub fn remaining(&self) -> usize {
        self.state().expectations.len()
    }

    // The lock is never held across an await point.
    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Expectation {
    fn matches(&self, request: &RestRequest) -> bool {
        self.method.as_ref().is_none_or(|method| *method == request.method)
            && self
                .url
                .as_deref()
                .is_none_or(|url| url == request.url.as_str())
    }
}

impl Transport for MockTransport {
    type Error = MockError;

    async fn send(
        &self,
        request: RestRequest,
        cancellation: CancellationToken,
    ) -> Result<RestResponse, Self::Error> {
        if cancellation.is_cancelled() {
            return Err(MockError::Cancelled);
        }

        let reply = {
            let mut state = self.state();
            let position = state
                .expectations
                .iter()
                .position(|expectation| expectation.matches(&request));
            let reply = position.map(|index| state.expectations.remove(index).reply);
            state.requests.push(request.clone());
            reply
        };
        debug!(method = %request.method, url = %request.url, matched = reply.is_some(), "mock request");

        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Pending) => {
                cancellation.cancelled().await;
                Err(MockError::Cancelled)
            }
            None => Err(MockError::Unexpected {
                method: request.method,
                url: request.url.to_string(),
            }),
        }
    }
}
