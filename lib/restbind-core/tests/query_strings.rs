#![allow(missing_docs)]

use http::Method;
use restbind_core::RestResponse;
use restbind_core::test_transport::MockTransport;

mod common;
pub use self::common::*;

#[tokio::test]
async fn primitive_may_be_included_in_query_string_with_default_name_of_parameter_name()
-> anyhow::Result<()> {
    let transport =
        MockTransport::new().expect(Method::POST, url("/empty?number=4"), RestResponse::ok(""));
    let client = client_of::<QueryStrings>(transport.clone());

    client.call(QueryStrings::primitive_with_default_name(4)).await?;

    assert_eq!(transport.remaining(), 0);
    Ok(())
}

#[tokio::test]
async fn primitive_may_be_included_in_query_string_with_specified_name() -> anyhow::Result<()> {
    let transport = MockTransport::new().expect(
        Method::POST,
        url("/empty?SpecifiedName=6"),
        RestResponse::ok(""),
    );
    let client = client_of::<QueryStrings>(transport.clone());

    client.call(QueryStrings::primitive_with_specified_name(6)).await?;

    assert_eq!(transport.remaining(), 0);
    Ok(())
}

#[tokio::test]
async fn pairs_are_joined_in_declaration_order() -> anyhow::Result<()> {
    let transport = MockTransport::new().expect(
        Method::GET,
        url("/empty?page=2&filter=birds&size=20"),
        RestResponse::ok(""),
    );
    let client = client_of::<QueryStrings>(transport.clone());

    client
        .call(QueryStrings::several_values(2, Some("birds"), 20))
        .await?;

    assert_eq!(transport.remaining(), 0);
    Ok(())
}

#[tokio::test]
async fn null_value_is_omitted_from_query_string() -> anyhow::Result<()> {
    let transport = MockTransport::new().expect(
        Method::GET,
        url("/empty?page=1&size=10"),
        RestResponse::ok(""),
    );
    let client = client_of::<QueryStrings>(transport.clone());

    client
        .call(QueryStrings::several_values(1, None, 10))
        .await?;

    let requests = transport.requests();
    let [request] = requests.as_slice() else {
        panic!("expected a single request, got {requests:?}");
    };
    assert_eq!(request.url.query(), Some("page=1&size=10"));
    Ok(())
}
