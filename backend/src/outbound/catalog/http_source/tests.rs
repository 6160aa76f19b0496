//! Coverage for the TheCatAPI adapter against a local mock server.

use mockito::{Matcher, Server, ServerGuard};
use rstest::rstest;
use serde_json::json;

use super::*;

const KEY: &str = "live_test_key";

async fn server() -> ServerGuard {
    Server::new_async().await
}

fn source(server: &ServerGuard, api_key: Option<&str>) -> CatApiHttpSource {
    let base = Url::parse(&format!("{}/v1", server.url())).expect("mock server URL");
    CatApiHttpSource::new(
        base,
        api_key.map(|key| Zeroizing::new(key.to_owned())),
        Duration::from_secs(5),
    )
    .expect("client builds")
}

fn breeds_json() -> String {
    json!([
        {"id": "abys", "name": "Abyssinian", "weight": {"imperial": "7  -  10", "metric": "3 - 5"}},
        {"id": "aege", "name": "Aegean", "origin": "Greece"}
    ])
    .to_string()
}

#[tokio::test]
async fn list_forwards_window_and_reads_total() {
    let mut server = server().await;
    let mock = server
        .mock("GET", "/v1/breeds")
        .match_header(API_KEY_HEADER, KEY)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "2".into()),
            Matcher::UrlEncoded("page".into(), "3".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header(PAGINATION_COUNT_HEADER, "67")
        .with_body(breeds_json())
        .create_async()
        .await;

    let window = source(&server, Some(KEY))
        .list_breeds(PageRequest::new(2, 3, 100).expect("valid window"))
        .await
        .expect("list succeeds");

    assert_eq!(window.total, Some(67));
    assert_eq!(window.breeds.len(), 2);
    assert_eq!(
        window.breeds[0].weight.as_ref().and_then(|w| w.metric.as_deref()),
        Some("3 - 5")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn list_without_count_header_reports_no_total() {
    let mut server = server().await;
    server
        .mock("GET", "/v1/breeds")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(breeds_json())
        .create_async()
        .await;

    let window = source(&server, None)
        .list_breeds(PageRequest::new(20, 0, 100).expect("valid window"))
        .await
        .expect("list succeeds");

    assert_eq!(window.total, None);
}

#[tokio::test]
async fn search_requests_attached_images() {
    let mut server = server().await;
    let mock = server
        .mock("GET", "/v1/breeds/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "bengal cat".into()),
            Matcher::UrlEncoded("attach_image".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(
            json!([{
                "id": "beng",
                "name": "Bengal",
                "image": {"id": "O3btzLlsO", "url": "https://cdn2.thecatapi.com/images/O3btzLlsO.png", "width": 1100, "height": 739}
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let breeds = source(&server, Some(KEY))
        .search_breeds("bengal cat")
        .await
        .expect("search succeeds");

    assert_eq!(breeds.len(), 1);
    assert_eq!(
        breeds[0].image.as_ref().and_then(|image| image.width),
        Some(1100)
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_returns_single_breed() {
    let mut server = server().await;
    server
        .mock("GET", "/v1/breeds/beng")
        .with_status(200)
        .with_body(json!({"id": "beng", "name": "Bengal", "indoor": 0}).to_string())
        .create_async()
        .await;

    let breed = source(&server, Some(KEY))
        .fetch_breed("beng")
        .await
        .expect("fetch succeeds");

    assert_eq!(breed.name, "Bengal");
    assert_eq!(breed.indoor, Some(0));
}

#[rstest]
#[case(404, "")]
#[case(200, "")]
#[case(200, "{}")]
#[tokio::test]
async fn fetch_unknown_breed_is_not_found(#[case] status: usize, #[case] body: &str) {
    let mut server = server().await;
    server
        .mock("GET", "/v1/breeds/xxxx")
        .with_status(status)
        .with_body(body)
        .create_async()
        .await;

    let error = source(&server, Some(KEY))
        .fetch_breed("xxxx")
        .await
        .expect_err("unknown breed");

    assert_eq!(error, BreedCatalogError::not_found());
}

#[tokio::test]
async fn non_success_status_carries_code_and_preview() {
    let mut server = server().await;
    server
        .mock("GET", "/v1/breeds/search")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("{\"message\":   \"AUTHENTICATION_ERROR\"}")
        .create_async()
        .await;

    let error = source(&server, Some("wrong"))
        .search_breeds("sib")
        .await
        .expect_err("unauthorised key");

    assert_eq!(
        error,
        BreedCatalogError::status(401_u16, "{\"message\": \"AUTHENTICATION_ERROR\"}")
    );
}

#[tokio::test]
async fn malformed_payload_is_decode_error() {
    let mut server = server().await;
    server
        .mock("GET", "/v1/breeds/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[{\"id\": 7}]")
        .create_async()
        .await;

    let error = source(&server, None)
        .search_breeds("sib")
        .await
        .expect_err("id must be a string");

    assert!(matches!(error, BreedCatalogError::Decode { .. }));
}

#[test]
fn endpoint_keeps_base_path_and_encodes_ids() {
    let source = CatApiHttpSource::new(
        Url::parse("https://api.thecatapi.com/v1/").expect("valid URL"),
        None,
        Duration::from_secs(1),
    )
    .expect("client builds");

    let url = source.endpoint(&["breeds", "a b"]).expect("endpoint builds");

    assert_eq!(url.as_str(), "https://api.thecatapi.com/v1/breeds/a%20b");
}

#[test]
fn rejects_api_keys_that_are_not_header_safe() {
    let result = CatApiHttpSource::new(
        Url::parse("https://api.thecatapi.com/v1").expect("valid URL"),
        Some(Zeroizing::new("bad\nkey".to_owned())),
        Duration::from_secs(1),
    );

    assert!(matches!(result, Err(CatApiClientError::InvalidApiKey)));
}

#[test]
fn long_bodies_are_truncated_in_previews() {
    let preview = body_preview("x".repeat(400).as_bytes());
    assert_eq!(preview.chars().count(), 163);
    assert!(preview.ends_with("..."));
}
