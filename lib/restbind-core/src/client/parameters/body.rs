use headers::ContentType;
use mime::Mime;
use tracing::debug;

use crate::client::ClientError;
use crate::client::invocation::MethodDescriptor;
use crate::contract::{BodyEncoding, ResolvedBinding};
use crate::serializer::Serializer;
use crate::transport::RequestBody;

/// The serialized body of a call, before encoding.
#[derive(Debug, Clone, PartialEq)]
pub(in crate::client) struct CallBody {
    pub(in crate::client) content_type: Mime,
    pub(in crate::client) encoding: BodyEncoding,
    pub(in crate::client) content: String,
}

impl CallBody {
    /// Serializes the body-bound argument, if any.
    ///
    /// A null argument produces no body and is never handed to the serializer.
    pub(in crate::client) fn assemble<S>(
        descriptor: &MethodDescriptor<'_>,
        serializer: &S,
    ) -> Result<Option<Self>, ClientError>
    where
        S: Serializer,
    {
        let method = descriptor.method();
        let Some((binding, encoding, content_type)) =
            descriptor
                .bindings()
                .iter()
                .find_map(|binding| match &binding.param.binding {
                    ResolvedBinding::Body {
                        encoding,
                        content_type,
                        ..
                    } => Some((binding, *encoding, content_type)),
                    _ => None,
                })
        else {
            return Ok(None);
        };

        let value = binding.value(method)?;
        if value.is_null() {
            debug!(method = method.qualified_name(), "null body, no content sent");
            return Ok(None);
        }

        let content = serializer
            .serialize(value)
            .map_err(|err| ClientError::Serializer {
                method: method.qualified_name().to_string(),
                error: Box::new(err),
            })?;

        Ok(Some(Self {
            content_type: content_type.clone(),
            encoding,
            content,
        }))
    }

    /// Encodes the content for the transport.
    pub(in crate::client) fn to_request_body(&self) -> RequestBody {
        RequestBody {
            content_type: ContentType::from(self.content_type.clone()),
            data: self.encoding.encode(&self.content),
        }
    }
}
