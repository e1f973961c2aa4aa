use http::header::HeaderName;
use indexmap::IndexMap;
use mime::Mime;
use tracing::debug;

use super::{
    Binding, BodyEncoding, Contract, HttpVerb, MethodDef, ParamDef, RouteTemplate, VerbDecl,
};
use crate::client::ConfigError;

/// Every operation of a contract, validated and resolved once.
#[derive(Debug)]
pub(crate) struct ContractRegistry {
    contract: &'static str,
    methods: IndexMap<String, ResolvedMethod>,
}

/// A contract operation ready to be translated into requests.
#[derive(Debug)]
pub(crate) struct ResolvedMethod {
    name: String,
    qualified_name: String,
    verb: HttpVerb,
    route: RouteTemplate,
    params: Vec<ResolvedParam>,
}

/// A formal parameter with its binding options resolved.
#[derive(Debug)]
pub(crate) struct ResolvedParam {
    pub(crate) name: String,
    pub(crate) type_name: Option<String>,
    pub(crate) binding: ResolvedBinding,
}

#[derive(Debug)]
pub(crate) enum ResolvedBinding {
    Route,
    Unbound,
    Header {
        name: HeaderName,
    },
    Query {
        name: String,
    },
    Body {
        encoding: BodyEncoding,
        content_type: Mime,
    },
}

impl ContractRegistry {
    pub(crate) fn resolve<C: Contract>() -> Result<Self, ConfigError> {
        Self::from_definitions(C::NAME, C::methods())
    }

    pub(crate) fn from_definitions(
        contract: &'static str,
        definitions: Vec<MethodDef>,
    ) -> Result<Self, ConfigError> {
        if definitions.is_empty() {
            return Err(ConfigError::EmptyContract { contract });
        }

        let mut methods = IndexMap::with_capacity(definitions.len());
        for definition in definitions {
            let resolved = ResolvedMethod::resolve(contract, definition)?;
            if methods.contains_key(&resolved.name) {
                return Err(ConfigError::DuplicateMethod {
                    method: resolved.qualified_name,
                });
            }
            methods.insert(resolved.name.clone(), resolved);
        }

        debug!(contract, methods = methods.len(), "contract resolved");
        Ok(Self { contract, methods })
    }

    pub(crate) fn contract(&self) -> &'static str {
        self.contract
    }

    pub(crate) fn method(&self, name: &str) -> Result<&ResolvedMethod, ConfigError> {
        self.methods
            .get(name)
            .ok_or_else(|| ConfigError::UnknownMethod {
                contract: self.contract,
                method: name.to_string(),
            })
    }
}

impl ResolvedMethod {
    fn resolve(contract: &str, definition: MethodDef) -> Result<Self, ConfigError> {
        let MethodDef {
            name,
            verb,
            route,
            params,
        } = definition;
        let qualified_name = format!("{contract}.{name}");

        let verb = match verb {
            None => {
                return Err(ConfigError::MissingVerb {
                    method: qualified_name,
                });
            }
            Some(VerbDecl::Verb(verb)) => verb,
            Some(VerbDecl::Marker(marker)) => match HttpVerb::from_marker(&marker) {
                Some(verb) => verb,
                None => {
                    return Err(ConfigError::UnrecognizedVerb {
                        method: qualified_name,
                        marker,
                    });
                }
            },
        };

        let Some(template) = route else {
            return Err(ConfigError::MissingRoute {
                method: qualified_name,
            });
        };
        if template.trim().is_empty() {
            return Err(ConfigError::BlankRoute {
                method: qualified_name,
            });
        }
        let route = RouteTemplate::parse(&template);

        for (index, param) in params.iter().enumerate() {
            let duplicated = params
                .iter()
                .skip(index + 1)
                .any(|other| other.name() == param.name());
            if duplicated {
                return Err(ConfigError::DuplicateParameter {
                    method: qualified_name,
                    parameter: param.name().to_string(),
                });
            }
        }

        let bodies: Vec<String> = params
            .iter()
            .filter(|param| matches!(param.binding(), Binding::Body { .. }))
            .map(|param| param.name().to_string())
            .collect();
        if bodies.len() > 1 {
            return Err(ConfigError::MultipleBodies {
                method: qualified_name,
                parameters: bodies,
            });
        }

        if let Some(variable) = route
            .variables()
            .iter()
            .find(|variable| !params.iter().any(|param| param.name() == variable.root))
        {
            return Err(ConfigError::UnknownRouteVariable {
                method: qualified_name,
                variable: variable.root.clone(),
                template: route.template().to_string(),
            });
        }

        let params = params
            .iter()
            .map(|param| ResolvedParam::resolve(&qualified_name, param))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            qualified_name,
            verb,
            route,
            params,
        })
    }

    /// `Contract.method`, used in diagnostics.
    pub(crate) fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub(crate) fn verb(&self) -> HttpVerb {
        self.verb
    }

    pub(crate) fn route(&self) -> &RouteTemplate {
        &self.route
    }

    pub(crate) fn params(&self) -> &[ResolvedParam] {
        &self.params
    }
}

impl ResolvedParam {
    fn resolve(method: &str, param: &ParamDef) -> Result<Self, ConfigError> {
        let binding = match param.binding() {
            Binding::Route => ResolvedBinding::Route,
            Binding::Unbound => ResolvedBinding::Unbound,
            Binding::Header { .. } => {
                let wire_name = param.wire_name();
                let name = HeaderName::from_bytes(wire_name.as_bytes()).map_err(|_| {
                    ConfigError::InvalidHeaderName {
                        method: method.to_string(),
                        header: wire_name.to_string(),
                    }
                })?;
                ResolvedBinding::Header { name }
            }
            Binding::Query { .. } => ResolvedBinding::Query {
                name: param.wire_name().to_string(),
            },
            Binding::Body {
                encoding,
                media_type,
            } => {
                ResolvedBinding::Body {
                    encoding: *encoding,
                    content_type: media_type.content_type(*encoding),
                }
            }
        };

        Ok(Self {
            name: param.name().to_string(),
            type_name: param.type_name().map(str::to_string),
            binding,
        })
    }
}

impl ResolvedParam {
    /// `name: type` when the type was recorded, `name` otherwise.
    pub(crate) fn describe(&self) -> String {
        match &self.type_name {
            Some(type_name) => format!("{}: {type_name}", self.name),
            None => self.name.clone(),
        }
    }
}
