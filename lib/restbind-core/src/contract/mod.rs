//! Contract declarations: the typed description of a remote REST API.
//!
//! A contract is a type implementing [`Contract`]. It lists its operations as
//! [`MethodDef`]s, each one with a verb, a route template and one
//! [`ParamDef`] per formal parameter. The declarations are validated and
//! resolved once, when a [`RestClient`](crate::RestClient) is built.

mod binding;
pub use self::binding::{Binding, BodyEncoding, MediaType, ParamDef};

mod verb;
pub use self::verb::HttpVerb;

mod route;
pub(crate) use self::route::RouteTemplate;

mod registry;
pub(crate) use self::registry::{ContractRegistry, ResolvedBinding, ResolvedMethod, ResolvedParam};

/// A typed definition of the operations available on a remote REST API.
///
/// # Example
///
/// ```rust
/// use restbind_core::{Contract, MethodDef, ParamDef};
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
///             MethodDef::new("search")
///                 .get()
///                 .route("/users")
///                 .param(ParamDef::query("name"))
///                 .param(ParamDef::header("trace").named("X-Trace-Id")),
///         ]
///     }
/// }
/// ```
pub trait Contract: 'static {
    /// Name of the contract, used in diagnostics.
    const NAME: &'static str;

    /// Declarations of every operation of the contract.
    fn methods() -> Vec<MethodDef>;
}

/// How the verb of a method was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
enum VerbDecl {
    Verb(HttpVerb),
    Marker(String),
}

/// Declaration of one contract operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    name: String,
    verb: Option<VerbDecl>,
    route: Option<String>,
    params: Vec<ParamDef>,
}

impl MethodDef {
    /// Starts the declaration of the operation `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            verb: None,
            route: None,
            params: Vec::new(),
        }
    }

    /// Binds the operation to `verb`.
    pub fn verb(mut self, verb: HttpVerb) -> Self {
        self.verb = Some(VerbDecl::Verb(verb));
        self
    }

    /// Binds the operation to a verb given by its marker, such as `"Patch"`.
    ///
    /// Unknown markers are reported when the client is built.
    pub fn verb_marker(mut self, marker: impl Into<String>) -> Self {
        self.verb = Some(VerbDecl::Marker(marker.into()));
        self
    }

    /// Shortcut for [`verb(HttpVerb::Get)`](Self::verb).
    pub fn get(self) -> Self {
        self.verb(HttpVerb::Get)
    }

    /// Shortcut for [`verb(HttpVerb::Post)`](Self::verb).
    pub fn post(self) -> Self {
        self.verb(HttpVerb::Post)
    }

    /// Shortcut for [`verb(HttpVerb::Put)`](Self::verb).
    pub fn put(self) -> Self {
        self.verb(HttpVerb::Put)
    }

    /// Shortcut for [`verb(HttpVerb::Delete)`](Self::verb).
    pub fn delete(self) -> Self {
        self.verb(HttpVerb::Delete)
    }

    /// Shortcut for [`verb(HttpVerb::Patch)`](Self::verb).
    pub fn patch(self) -> Self {
        self.verb(HttpVerb::Patch)
    }

    /// Shortcut for [`verb(HttpVerb::Head)`](Self::verb).
    pub fn head(self) -> Self {
        self.verb(HttpVerb::Head)
    }

    /// Shortcut for [`verb(HttpVerb::Options)`](Self::verb).
    pub fn options(self) -> Self {
        self.verb(HttpVerb::Options)
    }

    /// Sets the route template, e.g. `/users/{id}` or `/{request.id}`.
    pub fn route(mut self, template: impl Into<String>) -> Self {
        self.route = Some(template.into());
        self
    }

    /// Appends the next formal parameter.
    pub fn param(mut self, param: ParamDef) -> Self {
        self.params.push(param);
        self
    }

    /// The operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The formal parameters, in declaration order.
    pub fn params(&self) -> &[ParamDef] {
        &self.params
    }
}
