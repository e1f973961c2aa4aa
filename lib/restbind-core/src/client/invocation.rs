use std::fmt::{self, Debug};
use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use super::value::member;
use crate::client::ConfigError;
use crate::contract::{ContractRegistry, ResolvedMethod, ResolvedParam};

/// Description of one call: "invoke method `M` of contract `C` with these
/// arguments, expecting an `R`".
///
/// Arguments are given in the order of the formal parameters.
///
/// # Capture
///
/// Each argument is captured whole, through its `serde` representation, when
/// it is appended. Dereference chains are resolved lazily, but the value they
/// start from is not: a member the route never references still has to be
/// serializable, otherwise the call fails with
/// [`ConfigError::ArgumentCapture`] before anything is sent. Mark such members
/// `#[serde(skip_serializing)]`, or pass the referenced value itself.
///
/// # Example
///
/// ```rust
/// use restbind_core::{Contract, Invocation, MethodDef, ParamDef};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize)]
/// struct Request { text_content: String }
///
/// #[derive(Deserialize)]
/// struct Response { text_content: String }
///
/// struct UrlVariables;
///
/// impl Contract for UrlVariables {
///     const NAME: &'static str = "UrlVariables";
///
///     fn methods() -> Vec<MethodDef> {
///         vec![
///             MethodDef::new("dereferenced")
///                 .post()
///                 .route("/{number}/{value.text_content}")
///                 .param(ParamDef::route("number"))
///                 .param(ParamDef::route("value")),
///         ]
///     }
/// }
///
/// impl UrlVariables {
///     fn dereferenced(number: i32, value: &Request) -> Invocation<Self, Response> {
///         Invocation::new("dereferenced").arg(&number).arg(value)
///     }
/// }
///
/// let request = Request { text_content: "abc".to_string() };
/// let invocation = UrlVariables::dereferenced(4, &request);
/// assert_eq!(invocation.method(), "dereferenced");
/// assert_eq!(invocation.len(), 2);
/// ```
pub struct Invocation<C, R> {
    method: String,
    arguments: Vec<Result<Argument, serde_json::Error>>,
    _marker: PhantomData<fn() -> (C, R)>,
}

impl<C, R> Invocation<C, R> {
    /// Starts the description of a call to `method`.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Appends an already evaluated argument.
    ///
    /// The value is captured through its `serde` representation; a value that
    /// cannot be represented is reported when the call is made.
    pub fn arg<T>(mut self, value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        self.arguments
            .push(serde_json::to_value(value).map(Argument::Value));
        self
    }

    /// Appends an argument obtained by dereferencing `members` from `root`.
    ///
    /// The chain is resolved only when the argument is used.
    pub fn arg_deref<T, I, S>(mut self, root: &T, members: I) -> Self
    where
        T: Serialize + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members = members.into_iter().map(Into::into).collect();
        self.arguments.push(
            serde_json::to_value(root).map(|root| Argument::Deref(DerefChain::new(root, members))),
        );
        self
    }

    /// Appends an absent argument.
    pub fn arg_null(self) -> Self {
        self.argument(Argument::Value(Value::Null))
    }

    /// Appends a captured argument.
    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(Ok(argument));
        self
    }

    /// The invoked method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Whether no argument was given.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

impl<C, R> Debug for Invocation<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("method", &self.method)
            .field("arguments", &self.arguments)
            .finish()
    }
}

/// An actual argument of a call.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A literal or already evaluated value.
    Value(Value),
    /// A value reached through member accesses, resolved lazily.
    Deref(DerefChain),
}

/// A root value and the member names to follow from it.
#[derive(Debug, Clone, PartialEq)]
pub struct DerefChain {
    root: Value,
    members: Vec<String>,
}

impl DerefChain {
    /// Creates a chain `root.members[0].members[1]…`.
    pub fn new(root: Value, members: Vec<String>) -> Self {
        Self { root, members }
    }

    /// The root value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The member names, in access order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Follows the chain, returning the first member that cannot be found on failure.
    fn resolve(&self) -> Result<&Value, &str> {
        self.members.iter().try_fold(&self.root, |current, name| {
            member(current, name).ok_or(name.as_str())
        })
    }
}

impl Argument {
    fn resolve(&self) -> Result<&Value, &str> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Deref(chain) => chain.resolve(),
        }
    }
}

/// One call: the resolved method and one binding per formal parameter.
///
/// Created when a call starts, dropped when it completes.
#[derive(Debug)]
pub(crate) struct MethodDescriptor<'a> {
    method: &'a ResolvedMethod,
    bindings: Vec<ParameterBinding<'a>>,
}

/// A formal parameter paired with its actual argument.
#[derive(Debug)]
pub(crate) struct ParameterBinding<'a> {
    pub(crate) param: &'a ResolvedParam,
    pub(crate) argument: Argument,
}

impl<'a> MethodDescriptor<'a> {
    pub(crate) fn capture<C, R>(
        registry: &'a ContractRegistry,
        invocation: Invocation<C, R>,
    ) -> Result<Self, ConfigError> {
        let Invocation {
            method, arguments, ..
        } = invocation;
        let method = registry.method(&method)?;

        let params = method.params();
        if params.len() != arguments.len() {
            return Err(ConfigError::ArgumentCount {
                method: method.qualified_name().to_string(),
                expected: params.len(),
                actual: arguments.len(),
            });
        }

        let bindings = params
            .iter()
            .zip(arguments)
            .enumerate()
            .map(|(position, (param, argument))| {
                argument
                    .map(|argument| ParameterBinding { param, argument })
                    .map_err(|source| ConfigError::ArgumentCapture {
                        method: method.qualified_name().to_string(),
                        position,
                        parameter: param.describe(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { method, bindings })
    }

    pub(crate) fn method(&self) -> &'a ResolvedMethod {
        self.method
    }

    pub(crate) fn bindings(&self) -> &[ParameterBinding<'a>] {
        &self.bindings
    }

    pub(crate) fn binding(&self, name: &str) -> Option<&ParameterBinding<'a>> {
        self.bindings.iter().find(|binding| binding.param.name == name)
    }
}

impl ParameterBinding<'_> {
    /// The actual value, following the argument's dereference chain if any.
    pub(crate) fn value(&self, method: &ResolvedMethod) -> Result<&Value, ConfigError> {
        self.argument.resolve().map_err(|member| {
            let variable = match &self.argument {
                Argument::Deref(chain) => {
                    let mut variable = self.param.name.clone();
                    for name in chain.members() {
                        variable.push('.');
                        variable.push_str(name);
                    }
                    variable
                }
                Argument::Value(_) => self.param.name.clone(),
            };
            ConfigError::UnknownMember {
                method: method.qualified_name().to_string(),
                member: member.to_string(),
                variable,
            }
        })
    }
}
