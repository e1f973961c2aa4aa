//! # Restbind Core
//!
//! Describe a remote REST API as a typed contract, then turn each call on that
//! contract into an HTTP request and its response into a typed result.
//!
//! A contract lists its operations with their binding metadata:
//! - the HTTP verb ([`HttpVerb`]),
//! - a route template, where `{id}` and `{request.member.member}` placeholders
//!   are substituted with argument values,
//! - the placement of every parameter ([`Binding`]): route, header, query
//!   string, body, or nowhere.
//!
//! The declarations are validated once, when the [`RestClient`] is built.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use restbind_core::{Contract, Invocation, MethodDef, ParamDef, RestClient};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize)]
//! struct NewPost { title: String }
//!
//! #[derive(Deserialize)]
//! struct Post { id: u64, title: String }
//!
//! struct Posts;
//!
//! impl Contract for Posts {
//!     const NAME: &'static str = "Posts";
//!
//!     fn methods() -> Vec<MethodDef> {
//!         vec![
//!             MethodDef::new("create")
//!                 .post()
//!                 .route("/users/{user}/posts")
//!                 .param(ParamDef::route("user"))
//!                 .param(ParamDef::header("trace").named("X-Trace-Id"))
//!                 .param(ParamDef::body("post")),
//!             MethodDef::new("search")
//!                 .get()
//!                 .route("/posts")
//!                 .param(ParamDef::query("title")),
//!         ]
//!     }
//! }
//!
//! impl Posts {
//!     fn create(user: u64, trace: &str, post: &NewPost) -> Invocation<Self, Post> {
//!         Invocation::new("create").arg(&user).arg(trace).arg(post)
//!     }
//!
//!     fn search(title: Option<&str>) -> Invocation<Self, Vec<Post>> {
//!         Invocation::new("search").arg(&title)
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RestClient::<Posts>::builder()
//!     .with_base_url("http://blog.example.com/api")
//!     .build()?;
//!
//! // POST http://blog.example.com/api/users/42/posts
//! let post = client
//!     .call(Posts::create(42, "abc", &NewPost { title: "Hello".to_string() }))
//!     .await?;
//!
//! // GET http://blog.example.com/api/posts?title=Hello
//! let posts = client.call(Posts::search(Some(&post.title))).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Request Assembly
//!
//! - Route, header and query values use the string form of the argument:
//!   strings verbatim, numbers and booleans as JSON text, `null` as empty.
//!   Nothing is percent-encoded.
//! - Query and header parameters with a `null` value are omitted.
//! - The body is serialized by the [`Serializer`] (JSON by default) and encoded
//!   as UTF-16 unless another [`BodyEncoding`] is declared. A `null` body
//!   argument sends no body.
//! - Only `200 OK` is a successful response; anything else fails with
//!   [`ClientError::UnexpectedStatus`].
//!
//! ## Collaborators
//!
//! The [`Transport`] sends requests ([`ReqwestTransport`] by default) and the
//! [`Serializer`] handles bodies ([`JsonSerializer`] by default). Both can be
//! replaced on the [`RestClientBuilder`]; [`test_transport::MockTransport`] is
//! meant for tests.

mod client;
pub use self::client::{
    Argument, BoxError, ClientError, ConfigError, DerefChain, Invocation, RestClient,
    RestClientBuilder,
};

mod contract;
pub use self::contract::{
    Binding, BodyEncoding, Contract, HttpVerb, MediaType, MethodDef, ParamDef,
};

mod serializer;
pub use self::serializer::{JsonSerializer, JsonSerializerError, Serializer};

mod transport;
pub use self::transport::{
    RequestBody, ReqwestTransport, RestRequest, RestResponse, Transport, TransportError,
};

pub mod test_transport;

pub use tokio_util::sync::CancellationToken;
