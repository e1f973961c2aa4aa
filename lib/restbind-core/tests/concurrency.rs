#![allow(missing_docs)]

use http::Method;
use restbind_core::RestResponse;
use restbind_core::test_transport::MockTransport;
use tokio::task::JoinSet;

mod common;
pub use self::common::*;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_share_one_client() -> anyhow::Result<()> {
    let transport = (0..16).fold(MockTransport::new(), |transport, number| {
        transport.expect(
            Method::POST,
            url(&format!("/{number}")),
            RestResponse::ok(format!(r#"{{"text_content":"{number}"}}"#)),
        )
    });
    let client = client_of::<UrlVariables>(transport.clone());

    let mut calls = JoinSet::new();
    for number in 0..16 {
        let client = client.clone();
        calls.spawn(async move {
            let response = client
                .call(UrlVariables::direct_primitive_inclusion(number))
                .await?;
            anyhow::Ok((number, response))
        });
    }

    while let Some(result) = calls.join_next().await {
        let (number, response) = result??;
        assert_eq!(
            response,
            Some(Response {
                text_content: number.to_string()
            })
        );
    }
    assert_eq!(transport.remaining(), 0);
    assert_eq!(transport.requests().len(), 16);
    Ok(())
}
