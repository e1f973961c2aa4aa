use tracing::trace;
use url::Url;

use super::ClientError;
use super::invocation::MethodDescriptor;
use super::parameters::{CallBody, CallHeaders, CallQuery};
use super::path::PathResolved;
use crate::serializer::Serializer;
use crate::transport::RestRequest;

mod execution;
pub(in crate::client) use self::execution::map_result;


/// The status a response must carry for the call to succeed.
pub(in crate::client) const SUCCESS_STATUS: http::StatusCode = http::StatusCode::OK;

/// A call whose request is fully assembled and ready to dispatch.
///
/// Everything up to this point is synchronous and performs no I/O.
#[derive(Debug)]
pub(in crate::client) struct CallState {
    /// `Contract.method` of the call, for diagnostics.
    pub(in crate::client) method: String,
    pub(in crate::client) request: RestRequest,
}

impl CallState {
    pub(in crate::client) fn assemble<S>(
        base_url: &Url,
        descriptor: &MethodDescriptor<'_>,
        serializer: &S,
    ) -> Result<Self, ClientError>
    where
        S: Serializer,
    {
        let method = descriptor.method();
        let qualified_name = method.qualified_name().to_string();

        let path = PathResolved::resolve(descriptor)?;
        let query = CallQuery::assemble(descriptor)?;
        let headers = CallHeaders::assemble(descriptor)?;
        let body = CallBody::assemble(descriptor, serializer)?;

        let url = Self::build_url(base_url, &path, &query).map_err(|source| {
            ClientError::InvalidUrl {
                method: qualified_name.clone(),
                source,
            }
        })?;
        trace!(method = %qualified_name, %url, headers = headers.len(), "request assembled");

        let request = RestRequest {
            method: method.verb().method(),
            url,
            headers: headers.to_header_map(&qualified_name)?,
            body: body.as_ref().map(CallBody::to_request_body),
        };

        Ok(Self {
            method: qualified_name,
            request,
        })
    }

    /// `base + "/" + path`, followed by `"?" + query` when the query is not empty.
    pub(super) fn build_url(
        base_url: &Url,
        path: &PathResolved,
        query: &CallQuery,
    ) -> Result<Url, url::ParseError> {
        let mut url = format!(
            "{}/{}",
            base_url.as_str().trim_end_matches('/'),
            path.path.trim_start_matches('/')
        );

        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.to_query_string());
        }

        url.parse::<Url>()
    }
}
