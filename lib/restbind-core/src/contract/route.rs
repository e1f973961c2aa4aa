use std::sync::LazyLock;

use regex::Regex;

/// Matches `{variable}` and `{variable.member.member}` placeholders, non-greedy.
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<variable>.+?)\}").expect("a valid regex"));

const DEREFERENCE_OPERATOR: char = '.';

/// A route template with its placeholders extracted once, at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteTemplate {
    template: String,
    variables: Vec<RouteVariable>,
}

/// A placeholder reference: a root parameter followed by member accesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteVariable {
    /// Text between the braces, as written in the template.
    pub(crate) reference: String,
    pub(crate) root: String,
    pub(crate) members: Vec<String>,
}

impl RouteTemplate {
    pub(crate) fn parse(template: &str) -> Self {
        let mut variables: Vec<RouteVariable> = Vec::new();

        for caps in RE.captures_iter(template) {
            let Some(capture) = caps.name("variable") else {
                continue;
            };
            let reference = capture.as_str();
            if variables.iter().any(|it| it.reference == reference) {
                continue;
            }

            let mut segments = reference
                .split(DEREFERENCE_OPERATOR)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string);
            let root = segments.next().unwrap_or_default();
            let members = segments.collect();

            variables.push(RouteVariable {
                reference: reference.to_string(),
                root,
                members,
            });
        }

        Self {
            template: template.to_string(),
            variables,
        }
    }

    pub(crate) fn template(&self) -> &str {
        &self.template
    }

    pub(crate) fn variables(&self) -> &[RouteVariable] {
        &self.variables
    }
}
