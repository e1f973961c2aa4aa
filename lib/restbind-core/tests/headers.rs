#![allow(missing_docs)]

use http::Method;
use http::header::HeaderValue;
use restbind_core::RestResponse;
use restbind_core::test_transport::MockTransport;

mod common;
pub use self::common::*;

fn transport() -> MockTransport {
    MockTransport::new().expect(Method::POST, url(EMPTY_ROUTE), RestResponse::ok(""))
}

#[tokio::test]
async fn primitive_may_be_included_in_header_with_default_name_of_parameter_name()
-> anyhow::Result<()> {
    let transport = transport();
    let client = client_of::<Headers>(transport.clone());

    client.call(Headers::primitive_with_default_name(4)).await?;

    let requests = transport.requests();
    let [request] = requests.as_slice() else {
        panic!("expected a single request, got {requests:?}");
    };
    assert_eq!(request.headers.get("number"), Some(&HeaderValue::from_static("4")));
    Ok(())
}

#[tokio::test]
async fn primitive_may_be_included_in_header_with_specified_name() -> anyhow::Result<()> {
    let transport = transport();
    let client = client_of::<Headers>(transport.clone());

    client.call(Headers::primitive_with_specified_name(8)).await?;

    let requests = transport.requests();
    let [request] = requests.as_slice() else {
        panic!("expected a single request, got {requests:?}");
    };
    assert_eq!(
        request.headers.get("specifiedname"),
        Some(&HeaderValue::from_static("8"))
    );
    assert!(request.headers.get("number").is_none());
    Ok(())
}

#[tokio::test]
async fn null_header_is_omitted() -> anyhow::Result<()> {
    let transport = transport();
    let client = client_of::<Headers>(transport.clone());

    client.call(Headers::optional_with_default_name(None)).await?;

    let requests = transport.requests();
    let [request] = requests.as_slice() else {
        panic!("expected a single request, got {requests:?}");
    };
    assert!(request.headers.is_empty());
    Ok(())
}

#[tokio::test]
async fn header_value_is_not_dereferenced() -> anyhow::Result<()> {
    let transport = transport();
    let client = client_of::<Headers>(transport.clone());

    client
        .call(Headers::optional_with_default_name(Some("a.b")))
        .await?;

    let requests = transport.requests();
    let [request] = requests.as_slice() else {
        panic!("expected a single request, got {requests:?}");
    };
    assert_eq!(request.headers.get("trace"), Some(&HeaderValue::from_static("a.b")));
    Ok(())
}
