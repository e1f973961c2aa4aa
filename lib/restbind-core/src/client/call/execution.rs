use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{CallState, SUCCESS_STATUS};
use crate::client::ClientError;
use crate::serializer::Serializer;
use crate::transport::{RestResponse, Transport};

impl CallState {
    /// Sends the request and checks the response status.
    ///
    /// This is the only suspending step of a call; nothing is retried.
    pub(in crate::client) async fn execute<T>(
        self,
        transport: &T,
        cancellation: CancellationToken,
    ) -> Result<RestResponse, ClientError>
    where
        T: Transport,
    {
        let Self { method, request } = self;
        let url = request.url.clone();

        debug!(%method, verb = %request.method, %url, "sending...");
        let response = transport
            .send(request, cancellation)
            .await
            .map_err(|err| ClientError::Transport {
                method: method.clone(),
                url: url.clone(),
                error: Box::new(err),
            })?;
        debug!(%method, status = %response.status, "...receiving");

        if response.status != SUCCESS_STATUS {
            return Err(ClientError::UnexpectedStatus {
                method,
                url,
                status: response.status,
                body: response.text().into_owned(),
            });
        }

        Ok(response)
    }
}

/// Deserializes the body of a successful response into the expected result.
pub(in crate::client) fn map_result<R, S>(
    method: &str,
    response: &RestResponse,
    serializer: &S,
) -> Result<R, ClientError>
where
    R: DeserializeOwned,
    S: Serializer,
{
    serializer
        .deserialize(&response.text())
        .map_err(|err| ClientError::Serializer {
            method: method.to_string(),
            error: Box::new(err),
        })
}
