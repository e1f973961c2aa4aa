//! Request assembly from the header, query and body bound parameters.
//!
//! - [`CallHeaders`] - one header per non-null header-bound argument
//! - [`CallQuery`] - `name=value` pairs joined with `&`, null arguments omitted
//! - [`CallBody`] - the serialized and encoded body-bound argument
//!
//! Header and query arguments are taken at face value: their members are never
//! dereferenced.

mod headers;
pub(in crate::client) use self::headers::CallHeaders;

mod query;
pub(in crate::client) use self::query::CallQuery;

mod body;
pub(in crate::client) use self::body::CallBody;
