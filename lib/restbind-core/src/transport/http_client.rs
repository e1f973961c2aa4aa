use headers::HeaderMapExt;
use reqwest::{Body, Request};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{RestRequest, RestResponse, Transport};

/// Default transport, backed by a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

/// Errors raised by [`ReqwestTransport`].
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum TransportError {
    /// The HTTP exchange failed.
    #[display("HTTP request failed: {_0}")]
    Reqwest(reqwest::Error),

    /// The cancellation token fired before the response was received.
    #[display("HTTP request cancelled")]
    #[from(skip)]
    Cancelled,
}

impl ReqwestTransport {
    /// Creates a transport using a preconfigured client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl From<reqwest::Client> for ReqwestTransport {
    fn from(client: reqwest::Client) -> Self {
        Self::new(client)
    }
}

impl ReqwestTransport {
    fn build_request(request: RestRequest) -> Request {
        let RestRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut result = Request::new(method, url);
        *result.headers_mut() = headers;
        if let Some(body) = body {
            result.headers_mut().typed_insert(body.content_type);
            *result.body_mut() = Some(Body::from(body.data));
        }
        result
    }

    async fn exchange(&self, request: Request) -> Result<RestResponse, TransportError> {
        debug!(?request, "sending...");
        let response = self.client.execute(request).await?;
        debug!(?response, "...receiving");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(RestResponse {
            status,
            headers,
            body,
        })
    }
}

impl Transport for ReqwestTransport {
    type Error = TransportError;

    async fn send(
        &self,
        request: RestRequest,
        cancellation: CancellationToken,
    ) -> Result<RestResponse, Self::Error> {
        let request = Self::build_request(request);
        tokio::select! {
            biased;
            () = cancellation.cancelled() => Err(TransportError::Cancelled),
            result = self.exchange(request) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use headers::ContentType;
    use http::header::HeaderValue;
    use http::{HeaderMap, Method};
    use url::Url;

    use super::*;
    use crate::transport::RequestBody;

    fn request() -> RestRequest {
        let mut headers = HeaderMap::new();
        headers.insert("number", HeaderValue::from_static("4"));
        RestRequest {
            method: Method::POST,
            url: Url::parse("http://127.0.0.1:1/empty?number=4").expect("valid url"),
            headers,
            body: Some(RequestBody {
                content_type: ContentType::text_utf8(),
                data: Bytes::from_static(b"abc"),
            }),
        }
    }

    #[test]
    fn should_translate_request() {
        let request = ReqwestTransport::build_request(request());

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url().as_str(), "http://127.0.0.1:1/empty?number=4");
        assert_eq!(
            request.headers().get("number"),
            Some(&HeaderValue::from_static("4"))
        );
        assert_eq!(
            request.headers().get(http::header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("text/plain; charset=utf-8"))
        );
        assert_eq!(
            request.body().and_then(Body::as_bytes),
            Some(b"abc".as_slice())
        );
    }

    #[tokio::test]
    async fn should_stop_on_cancelled_token() {
        let transport = ReqwestTransport::default();
        let token = CancellationToken::new();
        token.cancel();

        let result = transport.send(request(), token).await;

        assert!(matches!(result, Err(TransportError::Cancelled)));
    }
}
