use tracing::debug;

use crate::client::ClientError;
use crate::client::invocation::MethodDescriptor;
use crate::client::value::to_text;
use crate::contract::ResolvedBinding;

const PAIR_SEPARATOR: &str = "&";

/// Query string pairs of a call, in parameter declaration order.
///
/// Names and values are not percent-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(in crate::client) struct CallQuery {
    pairs: Vec<(String, String)>,
}

impl CallQuery {
    /// Collects the query-bound arguments, omitting the null ones.
    pub(in crate::client) fn assemble(descriptor: &MethodDescriptor<'_>) -> Result<Self, ClientError> {
        let method = descriptor.method();
        let mut pairs = Vec::new();

        for binding in descriptor.bindings() {
            let ResolvedBinding::Query { name } = &binding.param.binding else {
                continue;
            };
            let value = binding.value(method)?;
            if value.is_null() {
                debug!(method = method.qualified_name(), query = %name, "null query value omitted");
                continue;
            }
            pairs.push((name.clone(), to_text(value).into_owned()));
        }

        Ok(Self { pairs })
    }

    pub(in crate::client) fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `name=value` pairs joined with `&`.
    pub(in crate::client) fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| [name.as_str(), "=", value.as_str()].concat())
            .collect::<Vec<_>>()
            .join(PAIR_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Invocation;
    use crate::contract::{ContractRegistry, MethodDef, ParamDef};

    struct Test;

    fn assemble(invocation: Invocation<Test, ()>) -> Result<CallQuery, ClientError> {
        let registry = ContractRegistry::from_definitions(
            "ITest",
            vec![
                MethodDef::new("run")
                    .get()
                    .route("/{number}")
                    .param(ParamDef::route("number"))
                    .param(ParamDef::query("first"))
                    .param(ParamDef::query("second").named("SpecifiedName")),
            ],
        )
        .expect("valid contract");
        let descriptor = MethodDescriptor::capture(&registry, invocation)?;
        CallQuery::assemble(&descriptor)
    }

    #[test]
    fn should_join_pairs_in_declaration_order() {
        let query = assemble(Invocation::new("run").arg(&1).arg(&4).arg("abc")).expect("assembled");

        assert_eq!(query.to_query_string(), "first=4&SpecifiedName=abc");
    }

    #[test]
    fn should_omit_null_values() {
        let query = assemble(Invocation::new("run").arg(&1).arg_null().arg("abc")).expect("assembled");

        assert_eq!(query.to_query_string(), "SpecifiedName=abc");
    }

    #[test]
    fn should_be_empty_when_every_value_is_null() {
        let query = assemble(Invocation::new("run").arg(&1).arg_null().arg_null()).expect("assembled");

        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn should_not_encode_values() {
        let query = assemble(Invocation::new("run").arg(&1).arg("a&b=c").arg(&true)).expect("assembled");

        assert_eq!(query.to_query_string(), "first=a&b=c&SpecifiedName=true");
    }
}
