use std::error::Error;
use std::fmt::Debug;

use http::StatusCode;
use url::Url;

/// Boxed error coming from a transport or serializer collaborator.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Errors in the contract declaration or in the invocation description.
///
/// These are programmer errors: they only depend on the declared metadata and
/// on the captured arguments, are detected before any network I/O, and fail
/// the same way every time for the same inputs.
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum ConfigError {
    /// The contract declares no operation.
    #[display("Contract '{contract}' declares no operation and cannot back a REST client")]
    EmptyContract {
        /// Contract name.
        contract: &'static str,
    },

    /// Two operations share the same name.
    #[display("REST interface method {method} is declared more than once")]
    DuplicateMethod {
        /// Type-qualified method name.
        method: String,
    },

    /// Two parameters of one operation share the same name.
    #[display("Parameter '{parameter}' is declared more than once in REST interface method {method}")]
    DuplicateParameter {
        /// Type-qualified method name.
        method: String,
        /// Duplicated parameter name.
        parameter: String,
    },

    /// The operation declares no verb.
    #[display(
        "Unable to determine HTTP verb for REST interface method {method}, did you forget to declare one?"
    )]
    MissingVerb {
        /// Type-qualified method name.
        method: String,
    },

    /// The verb marker is not one of the recognized verbs.
    #[display(
        "Unable to convert marker '{marker}' of REST interface method {method} into a recognized HTTP verb"
    )]
    UnrecognizedVerb {
        /// Type-qualified method name.
        method: String,
        /// The unrecognized marker.
        marker: String,
    },

    /// The operation declares no route template.
    #[display(
        "Unable to create an HTTP route for REST interface method {method}, did you forget to declare one?"
    )]
    MissingRoute {
        /// Type-qualified method name.
        method: String,
    },

    /// The route template is empty or whitespace.
    #[display(
        "Unable to create an HTTP route for REST interface method {method} with an empty or whitespace path"
    )]
    BlankRoute {
        /// Type-qualified method name.
        method: String,
    },

    /// More than one parameter is bound to the body.
    #[display(
        "Multiple parameters in REST interface method {method} are bound to the body: {parameters:?}, only one object may be included in the request body at a time"
    )]
    MultipleBodies {
        /// Type-qualified method name.
        method: String,
        /// Names of the body-bound parameters.
        parameters: Vec<String>,
    },

    /// A route placeholder does not start with a formal parameter name.
    #[display(
        "Unknown variable '{variable}' found in HTTP route path '{template}' for REST interface method {method}"
    )]
    UnknownRouteVariable {
        /// Type-qualified method name.
        method: String,
        /// The unresolved root reference.
        variable: String,
        /// The route template.
        template: String,
    },

    /// A member of a dereference chain does not exist on the current value.
    #[display(
        "Could not dereference unknown member '{member}' in variable '{variable}' for REST interface method {method}"
    )]
    UnknownMember {
        /// Type-qualified method name.
        method: String,
        /// The failing member name.
        member: String,
        /// The full variable reference.
        variable: String,
    },

    /// A header wire name is not a valid HTTP header name.
    #[display("Invalid header name '{header}' in REST interface method {method}")]
    InvalidHeaderName {
        /// Type-qualified method name.
        method: String,
        /// The invalid header name.
        header: String,
    },

    /// The invocation names a method the contract does not declare.
    #[display("Method '{method}' is not an operation of contract {contract}")]
    UnknownMethod {
        /// Contract name.
        contract: &'static str,
        /// The invoked method name.
        method: String,
    },

    /// The invocation does not carry one argument per formal parameter.
    #[display(
        "REST interface method {method} expects {expected} arguments but the invocation provides {actual}"
    )]
    ArgumentCount {
        /// Type-qualified method name.
        method: String,
        /// Number of formal parameters.
        expected: usize,
        /// Number of captured arguments.
        actual: usize,
    },

    /// An argument could not be captured as a value.
    #[display(
        "Unable to capture argument #{position} ({parameter}) of REST interface method {method}: {source}"
    )]
    ArgumentCapture {
        /// Type-qualified method name.
        method: String,
        /// Zero-based argument position.
        position: usize,
        /// Formal parameter, with its declared type when recorded.
        parameter: String,
        /// The serialization error.
        source: serde_json::Error,
    },

    /// The configured base URL is not an absolute URL.
    #[display("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// The parse error.
        source: url::ParseError,
    },

    /// The configured base URL carries a query string or a fragment, routes
    /// cannot be appended to it.
    #[display("Base URL '{url}' must not have a query string or a fragment")]
    BaseUrlWithQuery {
        /// The rejected URL.
        url: String,
    },

    /// The configured base path cannot be used.
    #[display("Invalid base path: {error}")]
    InvalidBasePath {
        /// Description of why the base path is invalid.
        error: String,
    },
}

/// Errors returned by a REST call.
///
/// Configuration errors are wrapped in [`ClientError::Config`]; everything else
/// happens at or after dispatch. Nothing is retried.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ClientError {
    /// Invalid contract declaration or invocation.
    Config(ConfigError),

    /// The assembled request target is not a valid URL.
    #[display("Invalid request URL for REST interface method {method}: {source}")]
    #[from(skip)]
    InvalidUrl {
        /// Type-qualified method name.
        method: String,
        /// The parse error.
        source: url::ParseError,
    },

    /// A header value contains characters not allowed in HTTP headers.
    #[display("Invalid value for header '{header}' in REST interface method {method}")]
    #[from(skip)]
    InvalidHeaderValue {
        /// Type-qualified method name.
        method: String,
        /// Header name.
        header: String,
        /// The header error.
        source: http::header::InvalidHeaderValue,
    },

    /// The transport failed; the transport error is kept as is.
    #[display("Transport failure for REST call to {url} ({method}): {error}")]
    #[from(skip)]
    Transport {
        /// Type-qualified method name.
        method: String,
        /// Requested URL.
        url: Url,
        /// The transport error.
        error: BoxError,
    },

    /// The serializer failed on the request body or the response body.
    #[display("Serializer failure in REST interface method {method}: {error}")]
    #[from(skip)]
    Serializer {
        /// Type-qualified method name.
        method: String,
        /// The serializer error.
        error: BoxError,
    },

    /// The response status is not the success status.
    #[display("Received status '{status}' for REST call to {url} ({method})")]
    #[from(skip)]
    UnexpectedStatus {
        /// Type-qualified method name.
        method: String,
        /// Requested URL.
        url: Url,
        /// Received status.
        status: StatusCode,
        /// Response body, for diagnostics.
        body: String,
    },
}

impl ClientError {
    /// The response status, for [`ClientError::UnexpectedStatus`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The response content, for [`ClientError::UnexpectedStatus`].
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::UnexpectedStatus { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether this error comes from the contract or the invocation.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<ConfigError>();
        assert_sync::<ConfigError>();
        assert_send::<ClientError>();
        assert_sync::<ClientError>();
    }

    #[test]
    fn should_expose_status_and_content() {
        let err = ClientError::UnexpectedStatus {
            method: "ITest.run".to_string(),
            url: Url::parse("http://localhost/empty").expect("valid url"),
            status: StatusCode::NOT_FOUND,
            body: "nope".to_string(),
        };

        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.content(), Some("nope"));
        assert!(!err.is_config());
        insta::assert_snapshot!(err, @"Received status '404 Not Found' for REST call to http://localhost/empty (ITest.run)");
    }

    #[test]
    fn should_wrap_config_error() {
        let err = ClientError::from(ConfigError::MissingRoute {
            method: "ITest.run".to_string(),
        });

        assert!(err.is_config());
        assert_eq!(err.status(), None);
        insta::assert_snapshot!(err, @"Unable to create an HTTP route for REST interface method ITest.run, did you forget to declare one?");
    }
}
