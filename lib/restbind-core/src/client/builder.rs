use std::fmt::Debug;
use std::marker::PhantomData;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use http::uri::{PathAndQuery, Scheme};
use tracing::debug;
use url::Url;

use super::{ConfigError, RestClient};
use crate::contract::{Contract, ContractRegistry};
use crate::serializer::{JsonSerializer, Serializer};
use crate::transport::{ReqwestTransport, Transport};

/// Builder for [`RestClient`].
///
/// The base URL is either given whole with [`with_base_url`](Self::with_base_url),
/// or assembled from a scheme, a host, a port and an optional base path
/// (by default `http://127.0.0.1:80`).
///
/// # Example
///
/// ```rust
/// use restbind_core::{Contract, MethodDef, RestClient};
///
/// struct Health;
///
/// impl Contract for Health {
///     const NAME: &'static str = "Health";
///
///     fn methods() -> Vec<MethodDef> {
///         vec![MethodDef::new("check").get().route("/health")]
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RestClient::<Health>::builder()
///     .with_host("api.example.com")
///     .with_port(8080)
///     .with_base_path("/api/v1")?
///     .build()?;
///
/// assert_eq!(client.base_url().as_str(), "http://api.example.com:8080/api/v1");
/// # Ok(())
/// # }
/// ```
#[derive(derive_more::Debug)]
pub struct RestClientBuilder<C, T = ReqwestTransport, S = JsonSerializer> {
    transport: T,
    serializer: S,
    scheme: Scheme,
    host: String,
    port: u16,
    base_path: Option<PathAndQuery>,
    base_url: Option<String>,
    #[debug(skip)]
    _contract: PhantomData<fn() -> C>,
}

impl<C, T, S> RestClientBuilder<C, T, S>
where
    C: Contract,
    T: Transport,
    S: Serializer,
{
    /// Resolves the contract and builds the client.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the contract declaration is invalid or the
    /// base URL cannot be built. No request is ever sent here.
    pub fn build(self) -> Result<RestClient<C, T, S>, ConfigError> {
        let Self {
            transport,
            serializer,
            scheme,
            host,
            port,
            base_path,
            base_url,
            _contract,
        } = self;

        let base_url = match base_url {
            Some(url) => url,
            None => {
                let path = base_path.as_ref().map(PathAndQuery::path).unwrap_or("/");
                format!("{scheme}://{host}:{port}{path}")
            }
        };
        let base_url = Url::parse(&base_url)
            .map_err(|source| ConfigError::InvalidBaseUrl { url: base_url, source })?;
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(ConfigError::BaseUrlWithQuery {
                url: base_url.to_string(),
            });
        }

        let registry = ContractRegistry::resolve::<C>()?;
        debug!(contract = C::NAME, %base_url, "REST client built");

        Ok(RestClient {
            base_url,
            transport: Arc::new(transport),
            serializer: Arc::new(serializer),
            registry: Arc::new(registry),
            _contract: PhantomData,
        })
    }
}

impl<C, T, S> RestClientBuilder<C, T, S> {
    /// Uses a whole base URL, overriding scheme, host, port and base path.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the scheme of the base URL.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the host of the base URL.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port of the base URL.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the path prefix of every route.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBasePath`] if `base_path` is not a valid path.
    pub fn with_base_path<P>(mut self, base_path: P) -> Result<Self, ConfigError>
    where
        P: TryInto<PathAndQuery>,
        P::Error: Debug + 'static,
    {
        let base_path = base_path
            .try_into()
            .map_err(|err| ConfigError::InvalidBasePath {
                error: format!("{err:?}"),
            })?;
        self.base_path = Some(base_path);
        Ok(self)
    }

    /// Replaces the transport collaborator.
    pub fn with_transport<T2>(self, transport: T2) -> RestClientBuilder<C, T2, S>
    where
        T2: Transport,
    {
        let Self {
            transport: _,
            serializer,
            scheme,
            host,
            port,
            base_path,
            base_url,
            _contract,
        } = self;

        RestClientBuilder {
            transport,
            serializer,
            scheme,
            host,
            port,
            base_path,
            base_url,
            _contract,
        }
    }

    /// Replaces the serializer collaborator.
    pub fn with_serializer<S2>(self, serializer: S2) -> RestClientBuilder<C, T, S2>
    where
        S2: Serializer,
    {
        let Self {
            transport,
            serializer: _,
            scheme,
            host,
            port,
            base_path,
            base_url,
            _contract,
        } = self;

        RestClientBuilder {
            transport,
            serializer,
            scheme,
            host,
            port,
            base_path,
            base_url,
            _contract,
        }
    }
}

impl<C, S> RestClientBuilder<C, ReqwestTransport, S> {
    /// Uses a preconfigured `reqwest` client for the default transport.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.transport = ReqwestTransport::new(client);
        self
    }
}

impl<C> Default for RestClientBuilder<C> {
    fn default() -> Self {
        Self {
            transport: ReqwestTransport::default(),
            serializer: JsonSerializer,
            scheme: Scheme::HTTP,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST).to_string(),
            port: 80,
            base_path: None,
            base_url: None,
            _contract: PhantomData,
        }
    }
}
