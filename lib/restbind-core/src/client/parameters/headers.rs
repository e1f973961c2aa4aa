use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};
use tracing::warn;

use crate::client::ClientError;
use crate::client::invocation::MethodDescriptor;
use crate::client::value::to_text;
use crate::contract::ResolvedBinding;

/// Headers of a call, in parameter declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(in crate::client) struct CallHeaders {
    headers: Vec<(HeaderName, String)>,
}

impl CallHeaders {
    /// Collects the header-bound arguments, omitting the null ones.
    pub(in crate::client) fn assemble(descriptor: &MethodDescriptor<'_>) -> Result<Self, ClientError> {
        let method = descriptor.method();
        let mut headers = Vec::new();

        for binding in descriptor.bindings() {
            let ResolvedBinding::Header { name } = &binding.param.binding else {
                continue;
            };
            let value = binding.value(method)?;
            if value.is_null() {
                warn!(method = method.qualified_name(), header = %name, "null header value omitted");
                continue;
            }
            headers.push((name.clone(), to_text(value).into_owned()));
        }

        Ok(Self { headers })
    }

    pub(in crate::client) fn len(&self) -> usize {
        self.headers.len()
    }

    /// Converts the headers into an HTTP header map.
    pub(in crate::client) fn to_header_map(&self, method: &str) -> Result<HeaderMap, ClientError> {
        let mut result = HeaderMap::with_capacity(self.headers.len());

        for (name, value) in &self.headers {
            let value = HeaderValue::from_str(value).map_err(|source| {
                ClientError::InvalidHeaderValue {
                    method: method.to_string(),
                    header: name.to_string(),
                    source,
                }
            })?;
            result.append(name.clone(), value);
        }

        Ok(result)
    }
}
