#![allow(missing_docs)]

use http::{Method, StatusCode};
use restbind_core::test_transport::MockTransport;
use restbind_core::{ClientError, RestResponse};
use rstest::rstest;

mod common;
pub use self::common::*;

#[rstest]
#[case::created(StatusCode::CREATED)]
#[case::no_content(StatusCode::NO_CONTENT)]
#[case::moved(StatusCode::MOVED_PERMANENTLY)]
#[case::not_found(StatusCode::NOT_FOUND)]
#[case::server_error(StatusCode::INTERNAL_SERVER_ERROR)]
#[tokio::test]
async fn any_status_but_ok_fails(#[case] status: StatusCode) -> anyhow::Result<()> {
    let transport = MockTransport::new().expect(
        Method::POST,
        url(EMPTY_ROUTE),
        RestResponse::new(status, "server says no"),
    );
    let client = client_of::<PostBody>(transport);

    let err = client
        .call(PostBody::run(Some(&Request::new("abc"))))
        .await
        .expect_err("non ok status");

    assert_eq!(err.status(), Some(status));
    assert_eq!(err.content(), Some("server says no"));
    let ClientError::UnexpectedStatus { url: failed, .. } = &err else {
        panic!("expected an unexpected status error, got {err:?}");
    };
    assert_eq!(failed.as_str(), url(EMPTY_ROUTE));
    Ok(())
}

#[tokio::test]
async fn status_error_message_names_status_and_url() -> anyhow::Result<()> {
    let transport = MockTransport::new().expect_any(RestResponse::new(StatusCode::NOT_FOUND, ""));
    let client = client_of::<QueryStrings>(transport);

    let err = client
        .call(QueryStrings::primitive_with_default_name(3))
        .await
        .expect_err("not found");

    insta::assert_snapshot!(err, @"Received status '404 Not Found' for REST call to http://localhost/empty?number=3 (IQueryStrings.primitive_with_default_name)");
    Ok(())
}

#[tokio::test]
async fn empty_ok_response_maps_to_none() -> anyhow::Result<()> {
    let transport = MockTransport::new().expect_any(RestResponse::ok(""));
    let client = client_of::<PostBody>(transport);

    let response = client.call(PostBody::run(Some(&Request::new("abc")))).await?;

    assert_eq!(response, None);
    Ok(())
}
