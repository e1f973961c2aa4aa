use tracing::trace;

use super::invocation::MethodDescriptor;
use super::value::{member, to_text};
use crate::client::ConfigError;

fn replace_path_param(path: &str, reference: &str, value: &str) -> String {
    let pattern = ["{", reference, "}"].concat();
    path.replace(&pattern, value)
}

/// The route of a call with every placeholder substituted.
///
/// Values are inserted verbatim: reserved URI characters are not escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PathResolved {
    pub(super) path: String,
}

impl PathResolved {
    /// Expands the route template of the described method.
    ///
    /// Only the placeholders present in the template are resolved, so members
    /// of an argument that the route does not reference are never looked up.
    pub(super) fn resolve(descriptor: &MethodDescriptor<'_>) -> Result<Self, ConfigError> {
        let method = descriptor.method();
        let route = method.route();
        let mut path = route.template().to_string();

        for variable in route.variables() {
            let Some(binding) = descriptor.binding(&variable.root) else {
                return Err(ConfigError::UnknownRouteVariable {
                    method: method.qualified_name().to_string(),
                    variable: variable.root.clone(),
                    template: route.template().to_string(),
                });
            };

            let mut current = binding.value(method)?;
            for name in &variable.members {
                current = member(current, name).ok_or_else(|| ConfigError::UnknownMember {
                    method: method.qualified_name().to_string(),
                    member: name.clone(),
                    variable: variable.reference.clone(),
                })?;
            }

            let text = to_text(current);
            trace!(variable = %variable.reference, value = %text, "route variable resolved");
            path = replace_path_param(&path, &variable.reference, &text);
        }

        Ok(Self { path })
    }
}
