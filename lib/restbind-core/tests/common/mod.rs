#![allow(dead_code)]

use restbind_core::test_transport::MockTransport;
use restbind_core::{Contract, MethodDef, RestClient};
use serde::{Deserialize, Serialize};
use tracing::info;

mod contracts;
pub use self::contracts::*;

pub const BASE_URL: &str = "http://localhost";
pub const EMPTY_ROUTE: &str = "/empty";

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub text_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub text_content: String,
}

impl Request {
    pub fn new(text_content: impl Into<String>) -> Self {
        Self {
            text_content: text_content.into(),
        }
    }
}

/// Absolute URL of `path` on the test base URL.
pub fn url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// A client of `C` sending through `transport`.
pub fn client_of<C>(transport: MockTransport) -> RestClient<C, MockTransport>
where
    C: Contract,
{
    init_tracing();
    match RestClient::<C>::builder()
        .with_base_url(BASE_URL)
        .with_transport(transport)
        .build()
    {
        Ok(client) => client,
        Err(error) => panic!("fail to build test client: {error}"),
    }
}

pub fn empty_route(name: &str) -> MethodDef {
    MethodDef::new(name).route(EMPTY_ROUTE)
}
