//! The serializer collaborator: turns request bodies into text and response
//! text into typed results.

use std::error::Error;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Converts values to and from their textual wire form.
///
/// The client never hands a `null` value to [`serialize`](Self::serialize).
pub trait Serializer: Send + Sync + 'static {
    /// Error raised by this serializer.
    type Error: Error + Send + Sync + 'static;

    /// Serializes a request body.
    ///
    /// # Errors
    ///
    /// Returns an error if the value has no textual representation.
    fn serialize(&self, value: &Value) -> Result<String, Self::Error>;

    /// Deserializes a response body into the expected result type.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not match the expected type.
    fn deserialize<T>(&self, text: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned;
}

/// Default serializer, based on `serde_json`.
///
/// An empty or blank response text is read as JSON `null`, so `()` and
/// `Option<T>` results accept an empty response.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

/// Errors raised by [`JsonSerializer`].
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum JsonSerializerError {
    /// The request body could not be written as JSON.
    #[display("Failed to serialize JSON: {source}")]
    Serialize {
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The response text does not match the expected type.
    #[display("Failed to deserialize JSON at '{path}': {source}")]
    Deserialize {
        /// Location of the failure in the JSON document.
        path: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

impl Serializer for JsonSerializer {
    type Error = JsonSerializerError;

    fn serialize(&self, value: &Value) -> Result<String, Self::Error> {
        serde_json::to_string(value).map_err(|source| JsonSerializerError::Serialize { source })
    }

    fn deserialize<T>(&self, text: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let text = if text.trim().is_empty() { "null" } else { text };
        let deserializer = &mut serde_json::Deserializer::from_str(text);
        serde_path_to_error::deserialize(deserializer).map_err(|err| {
            JsonSerializerError::Deserialize {
                path: err.path().to_string(),
                source: err.into_inner(),
            }
        })
    }
}
