use std::borrow::Cow;

use serde_json::Value;

/// Looks up a named member of a captured value.
///
/// Only objects have members; the names are the serialized field names.
pub(crate) fn member<'v>(value: &'v Value, name: &str) -> Option<&'v Value> {
    match value {
        Value::Object(fields) => fields.get(name),
        _ => None,
    }
}

/// String form of a captured value, as placed in routes, headers and queries.
///
/// Strings are taken verbatim, `null` is empty, anything else uses its
/// compact JSON text.
pub(crate) fn to_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(flag) => Cow::Owned(flag.to_string()),
        Value::Number(number) => Cow::Owned(number.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}
