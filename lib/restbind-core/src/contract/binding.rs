use bytes::Bytes;
use mime::Mime;
use tracing::warn;

/// Text encoding applied to a serialized request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum BodyEncoding {
    /// UTF-8.
    #[display("utf-8")]
    Utf8,
    /// UTF-16, little endian, without byte order mark.
    #[default]
    #[display("utf-16")]
    Utf16,
}

impl BodyEncoding {
    /// The `charset` parameter advertised in the `Content-Type` header.
    pub fn charset(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
        }
    }

    /// Encodes serialized text into the bytes sent on the wire.
    pub fn encode(self, text: &str) -> Bytes {
        match self {
            Self::Utf8 => Bytes::copy_from_slice(text.as_bytes()),
            Self::Utf16 => text
                .encode_utf16()
                .flat_map(u16::to_le_bytes)
                .collect::<Vec<u8>>()
                .into(),
        }
    }
}

/// Media type of a serialized request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum MediaType {
    /// `text/plain`
    #[display("text/plain")]
    PlainText,
    /// `application/json`
    #[default]
    #[display("application/json")]
    ApplicationJson,
}

impl MediaType {
    /// The media type without parameters.
    pub fn essence(self) -> Mime {
        match self {
            Self::PlainText => mime::TEXT_PLAIN,
            Self::ApplicationJson => mime::APPLICATION_JSON,
        }
    }

    /// The full content type, including the charset of `encoding`.
    pub fn content_type(self, encoding: BodyEncoding) -> Mime {
        let essence = self.essence();
        // both essences and charsets are fixed tokens, the parse cannot fail
        format!("{essence}; charset={}", encoding.charset())
            .parse()
            .unwrap_or(essence)
    }
}

/// Where a parameter's value is placed in the outgoing request.
///
/// Every parameter of a contract method carries exactly one binding.
/// `Header` and `Query` fall back to the parameter name when no explicit
/// wire name is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Only referenced from the route template.
    Route,
    /// Sent as a request header.
    Header {
        /// Explicit header name, if any.
        name: Option<String>,
    },
    /// Sent as a query string parameter.
    Query {
        /// Explicit query parameter name, if any.
        name: Option<String>,
    },
    /// Serialized as the request body.
    Body {
        /// Encoding of the serialized text.
        encoding: BodyEncoding,
        /// Media type of the serialized text.
        media_type: MediaType,
    },
    /// Not placed anywhere.
    Unbound,
}

impl Binding {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Route => "route",
            Self::Header { .. } => "header",
            Self::Query { .. } => "query",
            Self::Body { .. } => "body",
            Self::Unbound => "unbound",
        }
    }
}

/// Declaration of one formal parameter of a contract method.
///
/// # Example
///
/// ```rust
/// use restbind_core::{Binding, BodyEncoding, MediaType, ParamDef};
///
/// let id = ParamDef::route("id");
/// let trace = ParamDef::header("trace").named("X-Trace-Id");
/// let page = ParamDef::query("page");
/// let payload = ParamDef::body("payload").encoding(BodyEncoding::Utf8);
///
/// assert_eq!(trace.binding(), &Binding::Header { name: Some("X-Trace-Id".to_string()) });
/// assert_eq!(
///     payload.binding(),
///     &Binding::Body { encoding: BodyEncoding::Utf8, media_type: MediaType::ApplicationJson }
/// );
/// # let _ = (id, page);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDef {
    name: String,
    type_name: Option<String>,
    binding: Binding,
}

impl ParamDef {
    /// Declares a parameter with the given binding.
    pub fn new(name: impl Into<String>, binding: Binding) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            binding,
        }
    }

    /// A parameter referenced from the route template.
    pub fn route(name: impl Into<String>) -> Self {
        Self::new(name, Binding::Route)
    }

    /// A parameter sent as a header named after the parameter.
    pub fn header(name: impl Into<String>) -> Self {
        Self::new(name, Binding::Header { name: None })
    }

    /// A parameter sent in the query string under the parameter name.
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(name, Binding::Query { name: None })
    }

    /// A parameter serialized as the body, UTF-16 `application/json` by default.
    pub fn body(name: impl Into<String>) -> Self {
        Self::new(
            name,
            Binding::Body {
                encoding: BodyEncoding::default(),
                media_type: MediaType::default(),
            },
        )
    }

    /// A parameter with no placement.
    pub fn unbound(name: impl Into<String>) -> Self {
        Self::new(name, Binding::Unbound)
    }

    /// Overrides the wire name of a header or query parameter.
    pub fn named(mut self, wire_name: impl Into<String>) -> Self {
        match &mut self.binding {
            Binding::Header { name } | Binding::Query { name } => *name = Some(wire_name.into()),
            other => {
                warn!(param = %self.name, binding = other.kind(), "wire name ignored");
            }
        }
        self
    }

    /// Sets the encoding of a body parameter.
    pub fn encoding(mut self, value: BodyEncoding) -> Self {
        match &mut self.binding {
            Binding::Body { encoding, .. } => *encoding = value,
            other => {
                warn!(param = %self.name, binding = other.kind(), "body encoding ignored");
            }
        }
        self
    }

    /// Sets the media type of a body parameter.
    pub fn media_type(mut self, value: MediaType) -> Self {
        match &mut self.binding {
            Binding::Body { media_type, .. } => *media_type = value,
            other => {
                warn!(param = %self.name, binding = other.kind(), "media type ignored");
            }
        }
        self
    }

    /// Records the declared Rust type, used in diagnostics.
    pub fn of_type<T: ?Sized>(mut self) -> Self {
        self.type_name = Some(std::any::type_name::<T>().to_string());
        self
    }

    /// The formal parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type, if recorded.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// The binding of this parameter.
    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    /// The header or query wire name: the explicit name when it is not blank,
    /// the parameter name otherwise.
    pub(crate) fn wire_name(&self) -> &str {
        match &self.binding {
            Binding::Header { name: Some(name) } | Binding::Query { name: Some(name) }
                if !name.trim().is_empty() =>
            {
                name
            }
            _ => &self.name,
        }
    }
}
