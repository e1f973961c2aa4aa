use std::sync::LazyLock;

use http::Method;
use indexmap::IndexMap;

/// HTTP verbs that a contract method may be bound to.
///
/// A method declares exactly one verb. The verb is mapped to the [`Method`]
/// used on the wire through an immutable table built once per process.
///
/// ```rust
/// use restbind_core::HttpVerb;
///
/// assert_eq!(HttpVerb::Patch.method().as_str(), "PATCH");
/// assert_eq!(HttpVerb::from_marker("options"), Some(HttpVerb::Options));
/// assert_eq!(HttpVerb::from_marker("TRACE"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpVerb {
    /// `GET`
    #[display("GET")]
    Get,
    /// `POST`
    #[display("POST")]
    Post,
    /// `PUT`
    #[display("PUT")]
    Put,
    /// `DELETE`
    #[display("DELETE")]
    Delete,
    /// `PATCH`
    #[display("PATCH")]
    Patch,
    /// `HEAD`
    #[display("HEAD")]
    Head,
    /// `OPTIONS`
    #[display("OPTIONS")]
    Options,
}

/// Marker token to verb.
static VERB_MARKERS: LazyLock<IndexMap<&'static str, HttpVerb>> = LazyLock::new(|| {
    IndexMap::from([
        ("GET", HttpVerb::Get),
        ("POST", HttpVerb::Post),
        ("PUT", HttpVerb::Put),
        ("DELETE", HttpVerb::Delete),
        ("PATCH", HttpVerb::Patch),
        ("HEAD", HttpVerb::Head),
        ("OPTIONS", HttpVerb::Options),
    ])
});

impl HttpVerb {
    /// All recognized verbs, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Delete,
        Self::Patch,
        Self::Head,
        Self::Options,
    ];

    /// Resolves a verb marker such as `"Get"` or `"PATCH"` (case-insensitive).
    ///
    /// Returns `None` for markers outside the recognized set.
    pub fn from_marker(marker: &str) -> Option<Self> {
        let marker = marker.trim().to_ascii_uppercase();
        VERB_MARKERS.get(marker.as_str()).copied()
    }

    /// The HTTP method sent on the wire for this verb.
    pub fn method(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
            Self::Delete => Method::DELETE,
            Self::Patch => Method::PATCH,
            Self::Head => Method::HEAD,
            Self::Options => Method::OPTIONS,
        }
    }
}
