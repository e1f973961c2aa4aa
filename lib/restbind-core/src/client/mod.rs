use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::contract::{Contract, ContractRegistry};
use crate::serializer::{JsonSerializer, Serializer};
use crate::transport::{ReqwestTransport, Transport};

mod builder;
pub use self::builder::RestClientBuilder;

mod invocation;
pub use self::invocation::{Argument, DerefChain, Invocation};

mod call;
use self::call::CallState;
use self::invocation::MethodDescriptor;

mod parameters;
mod path;
mod value;

mod error;
pub use self::error::{BoxError, ClientError, ConfigError};

/// A client translating calls on the contract `C` into REST requests.
///
/// The client holds no per-call state: it can be shared and used by many
/// concurrent calls. Cloning is cheap, the transport, serializer and resolved
/// contract are reference counted.
///
/// # Example
///
/// ```rust,no_run
/// use restbind_core::{Contract, Invocation, MethodDef, ParamDef, RestClient};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct User { id: u32, name: String }
///
/// struct Users;
///
/// impl Contract for Users {
///     const NAME: &'static str = "Users";
///
///     fn methods() -> Vec<MethodDef> {
///         vec![
///             MethodDef::new("get_user")
///                 .get()
///                 .route("/users/{id}")
///                 .param(ParamDef::route("id")),
///         ]
///     }
/// }
///
/// impl Users {
///     fn get_user(id: u32) -> Invocation<Self, User> {
///         Invocation::new("get_user").arg(&id)
///     }
/// }
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RestClient::<Users>::builder()
///     .with_base_url("http://api.example.com/v1")
///     .build()?;
///
/// let user = client.call(Users::get_user(123)).await?;
/// println!("{}", user.name);
/// # Ok(())
/// # }
/// ```
pub struct RestClient<C, T = ReqwestTransport, S = JsonSerializer> {
    base_url: Url,
    transport: Arc<T>,
    serializer: Arc<S>,
    registry: Arc<ContractRegistry>,
    _contract: PhantomData<fn() -> C>,
}

impl<C> RestClient<C>
where
    C: Contract,
{
    /// Creates a builder using the default transport and serializer.
    pub fn builder() -> RestClientBuilder<C> {
        RestClientBuilder::default()
    }
}

impl<C, T, S> RestClient<C, T, S>
where
    C: Contract,
    T: Transport,
    S: Serializer,
{
    /// Translates the invocation into a request, sends it and maps the response.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Config`] if the invocation does not match the contract,
    ///   or a route member cannot be resolved; no request is sent
    /// - [`ClientError::Transport`] if the transport fails
    /// - [`ClientError::UnexpectedStatus`] if the response status is not `200 OK`
    /// - [`ClientError::Serializer`] if the body or the response cannot be (de)serialized
    pub async fn call<R>(&self, invocation: Invocation<C, R>) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        self.call_with_cancellation(invocation, CancellationToken::new())
            .await
    }

    /// Same as [`call`](Self::call), with a cancellation token handed to the transport.
    ///
    /// Request assembly is not cancellable; only the dispatch observes the token.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call). A cancelled dispatch fails with the transport's
    /// own error in [`ClientError::Transport`].
    pub async fn call_with_cancellation<R>(
        &self,
        invocation: Invocation<C, R>,
        cancellation: CancellationToken,
    ) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        let state = {
            let descriptor = MethodDescriptor::capture(&self.registry, invocation)?;
            CallState::assemble(&self.base_url, &descriptor, self.serializer.as_ref())?
        };

        let method = state.method.clone();
        let response = state.execute(self.transport.as_ref(), cancellation).await?;
        call::map_result(&method, &response, self.serializer.as_ref())
    }

    /// The base URL every route is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The transport collaborator.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The serializer collaborator.
    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    /// The name of the contract.
    pub fn contract(&self) -> &'static str {
        self.registry.contract()
    }
}

impl<C, T, S> Clone for RestClient<C, T, S> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: Arc::clone(&self.transport),
            serializer: Arc::clone(&self.serializer),
            registry: Arc::clone(&self.registry),
            _contract: PhantomData,
        }
    }
}

impl<C, T, S> Debug for RestClient<C, T, S>
where
    T: Debug,
    S: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("contract", &self.registry.contract())
            .field("base_url", &self.base_url.as_str())
            .field("transport", &self.transport)
            .field("serializer", &self.serializer)
            .finish_non_exhaustive()
    }
}
