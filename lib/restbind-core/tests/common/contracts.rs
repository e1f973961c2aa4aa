use restbind_core::{Contract, HttpVerb, Invocation, MethodDef, ParamDef};

use super::{Request, Response, empty_route};

/// Route placeholders, direct and dereferenced.
pub struct UrlVariables;

impl Contract for UrlVariables {
    const NAME: &'static str = "IUrlVariables";

    fn methods() -> Vec<MethodDef> {
        vec![
            MethodDef::new("dereferenced_complex_object")
                .post()
                .route("/{value.text_content}")
                .param(ParamDef::route("value")),
            MethodDef::new("direct_primitive_inclusion")
                .post()
                .route("/{number}")
                .param(ParamDef::route("number")),
            MethodDef::new("multiple_direct_primitive_inclusion")
                .post()
                .route("/{number}/{other_number}")
                .param(ParamDef::route("number"))
                .param(ParamDef::route("other_number")),
            MethodDef::new("direct_primitive_and_complex_dereference")
                .post()
                .route("/{number}/{request.text_content}")
                .param(ParamDef::route("number"))
                .param(ParamDef::route("request")),
        ]
    }
}

impl UrlVariables {
    pub fn dereferenced_complex_object(value: &Request) -> Invocation<Self, Option<Response>> {
        Invocation::new("dereferenced_complex_object").arg(value)
    }

    pub fn direct_primitive_inclusion(number: i32) -> Invocation<Self, Option<Response>> {
        Invocation::new("direct_primitive_inclusion").arg(&number)
    }

    pub fn multiple_direct_primitive_inclusion(
        number: i32,
        other_number: i32,
    ) -> Invocation<Self, Option<Response>> {
        Invocation::new("multiple_direct_primitive_inclusion")
            .arg(&number)
            .arg(&other_number)
    }

    pub fn direct_primitive_and_complex_dereference(
        number: i32,
        request: &Request,
    ) -> Invocation<Self, Option<Response>> {
        Invocation::new("direct_primitive_and_complex_dereference")
            .arg(&number)
            .arg(request)
    }
}

/// Header-bound parameters.
pub struct Headers;

impl Contract for Headers {
    const NAME: &'static str = "IHeaders";

    fn methods() -> Vec<MethodDef> {
        vec![
            empty_route("primitive_with_default_name")
                .post()
                .param(ParamDef::header("number")),
            empty_route("primitive_with_specified_name")
                .post()
                .param(ParamDef::header("number").named("SpecifiedName")),
            empty_route("optional_with_default_name")
                .post()
                .param(ParamDef::header("trace")),
        ]
    }
}

impl Headers {
    pub fn primitive_with_default_name(number: i32) -> Invocation<Self, Option<Response>> {
        Invocation::new("primitive_with_default_name").arg(&number)
    }

    pub fn primitive_with_specified_name(number: i32) -> Invocation<Self, Option<Response>> {
        Invocation::new("primitive_with_specified_name").arg(&number)
    }

    pub fn optional_with_default_name(trace: Option<&str>) -> Invocation<Self, Option<Response>> {
        Invocation::new("optional_with_default_name").arg(&trace)
    }
}

/// Query-bound parameters.
pub struct QueryStrings;

impl Contract for QueryStrings {
    const NAME: &'static str = "IQueryStrings";

    fn methods() -> Vec<MethodDef> {
        vec![
            empty_route("primitive_with_default_name")
                .post()
                .param(ParamDef::query("number")),
            empty_route("primitive_with_specified_name")
                .post()
                .param(ParamDef::query("number").named("SpecifiedName")),
            empty_route("several_values")
                .get()
                .param(ParamDef::query("page"))
                .param(ParamDef::query("filter"))
                .param(ParamDef::query("size")),
        ]
    }
}

impl QueryStrings {
    pub fn primitive_with_default_name(number: i32) -> Invocation<Self, Option<Response>> {
        Invocation::new("primitive_with_default_name").arg(&number)
    }

    pub fn primitive_with_specified_name(number: i32) -> Invocation<Self, Option<Response>> {
        Invocation::new("primitive_with_specified_name").arg(&number)
    }

    pub fn several_values(
        page: u32,
        filter: Option<&str>,
        size: u32,
    ) -> Invocation<Self, Option<Response>> {
        Invocation::new("several_values")
            .arg(&page)
            .arg(&filter)
            .arg(&size)
    }
}

/// A single body-bound parameter.
pub struct PostBody;

impl Contract for PostBody {
    const NAME: &'static str = "IPostBody";

    fn methods() -> Vec<MethodDef> {
        vec![empty_route("run").post().param(ParamDef::body("value"))]
    }
}

impl PostBody {
    pub fn run(value: Option<&Request>) -> Invocation<Self, Option<Response>> {
        Invocation::new("run").arg(&value)
    }
}

/// One operation per verb, all on the same route.
pub struct HttpVerbs;

impl Contract for HttpVerbs {
    const NAME: &'static str = "IHttpVerbs";

    fn methods() -> Vec<MethodDef> {
        HttpVerb::ALL
            .iter()
            .map(|verb| {
                empty_route(&verb.to_string())
                    .verb(*verb)
                    .param(ParamDef::body("value"))
            })
            .collect()
    }
}

impl HttpVerbs {
    pub fn call(verb: HttpVerb, value: &Request) -> Invocation<Self, Option<Response>> {
        Invocation::new(verb.to_string()).arg(value)
    }
}
