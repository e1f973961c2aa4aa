//! The transport collaborator: sends one assembled request and returns the
//! response.
//!
//! [`ReqwestTransport`] is used unless another transport is configured on the
//! [`RestClientBuilder`](crate::RestClientBuilder). Tests usually plug the
//! in-memory [`MockTransport`](crate::test_transport::MockTransport) instead.

use std::borrow::Cow;
use std::error::Error;
use std::future::Future;

use bytes::Bytes;
use headers::ContentType;
use http::{HeaderMap, Method, StatusCode};
use mime::Mime;
use tokio_util::sync::CancellationToken;
use url::Url;

mod http_client;
pub use self::http_client::{ReqwestTransport, TransportError};

/// Sends HTTP requests.
///
/// Implementations must honour the cancellation token: once it is cancelled,
/// the pending send should stop and fail with the transport's own error.
pub trait Transport: Send + Sync + 'static {
    /// Error raised by this transport.
    type Error: Error + Send + Sync + 'static;

    /// Sends `request` and waits for the response.
    fn send(
        &self,
        request: RestRequest,
        cancellation: CancellationToken,
    ) -> impl Future<Output = Result<RestResponse, Self::Error>> + Send;
}

/// A fully assembled HTTP request.
#[derive(Debug, Clone)]
pub struct RestRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request target, query string included.
    pub url: Url,
    /// Headers of the header-bound parameters.
    pub headers: HeaderMap,
    /// Encoded body, if the method has a non-null body parameter.
    pub body: Option<RequestBody>,
}

/// An encoded request body with its content type.
#[derive(Clone, derive_more::Debug)]
pub struct RequestBody {
    /// Media type and charset of the data.
    pub content_type: ContentType,
    /// The encoded text.
    #[debug(ignore)]
    pub data: Bytes,
}

impl RequestBody {
    /// Decodes the body according to the charset of its content type.
    ///
    /// `utf-16` bodies are read as little endian; anything else as UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        let mime = Mime::from(self.content_type.clone());
        let utf16 = mime
            .get_param(mime::CHARSET)
            .is_some_and(|charset| charset.as_str().eq_ignore_ascii_case("utf-16"));
        if !utf16 {
            return String::from_utf8_lossy(&self.data);
        }

        let units: Vec<u16> = self
            .data
            .chunks_exact(2)
            .filter_map(|pair| pair.try_into().ok().map(u16::from_le_bytes))
            .collect();
        Cow::Owned(String::from_utf16_lossy(&units))
    }
}

/// A response received from a transport.
#[derive(Debug, Clone)]
pub struct RestResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: Bytes,
}

impl RestResponse {
    /// Creates a response with the given status and body and no header.
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Creates a `200 OK` response.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// The body as text, invalid UTF-8 sequences being replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
