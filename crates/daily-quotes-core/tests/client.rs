use daily_quotes_core::{AppState, Effect, Intent, ProviderError, QuoteClient, QuoteRecord, Tag};
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;

async fn serve(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/random"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn fetches_unfiltered_quote() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({
        "_id": "abc",
        "content": "Be yourself.",
        "author": "Oscar Wilde",
        "tags": ["wisdom"],
        "length": 12
    })))
    .await;

    let client = QuoteClient::new(&server.uri());
    let quote = client.fetch_quote(None).await.unwrap();

    assert_eq!(quote, QuoteRecord::new("Be yourself.", "Oscar Wilde", &["wisdom"]));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn sends_tag_as_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/random"))
        .and(query_param("tags", "love"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": "Love all.",
            "author": "Shakespeare",
            "tags": ["love"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = QuoteClient::new(&server.uri());
    let quote = client.fetch_quote(Some("love")).await.unwrap();
    assert_eq!(quote.tags, vec!["love".to_string()]);
}

#[tokio::test]
async fn empty_tag_means_no_filter() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({
        "content": "A",
        "author": "B"
    })))
    .await;

    let client = QuoteClient::new(&server.uri());
    let quote = client.fetch_quote(Some("")).await.unwrap();
    assert!(quote.tags.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn unknown_tag_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/random"))
        .and(query_param("tags", "friendship"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "statusCode": 404,
            "statusMessage": "Could not find any matching quotes"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = QuoteClient::new(&server.uri());
    let err = client.fetch_quote(Some("friendship")).await.unwrap_err();
    assert!(matches!(err, ProviderError::HttpStatus(status) if status.as_u16() == 404));
}

#[tokio::test]
async fn server_error_is_http_status_error() {
    let server = serve(ResponseTemplate::new(503)).await;

    let client = QuoteClient::new(&server.uri());
    let err = client.fetch_quote(None).await.unwrap_err();
    assert!(matches!(err, ProviderError::HttpStatus(_)));
}

#[tokio::test]
async fn missing_fields_are_malformed() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({ "content": "A" }))).await;

    let client = QuoteClient::new(&server.uri());
    let err = client.fetch_quote(None).await.unwrap_err();
    assert!(matches!(err, ProviderError::MalformedPayload(_)));
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    // Grab a free port and release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = QuoteClient::new(&format!("http://127.0.0.1:{}", port));
    let err = client.fetch_quote(None).await.unwrap_err();
    assert!(matches!(err, ProviderError::Network(_)));
}

#[tokio::test]
async fn fetch_result_drives_state() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({
        "content": "A",
        "author": "B",
        "tags": ["life"]
    })))
    .await;
    let client = QuoteClient::new(&server.uri());

    let mut state = AppState::new();
    let (request, tag) = match state.apply(Intent::SelectTag(Tag::Life)) {
        Some(Effect::Fetch { request, tag }) => (request, tag),
        other => panic!("expected fetch, got {:?}", other),
    };

    let result = client.fetch_quote(tag.map(|t| t.as_str())).await;
    let intent = match result {
        Ok(record) => Intent::ProviderSucceeded(request, record),
        Err(e) => Intent::ProviderFailed(request, e),
    };
    state.apply(intent);

    assert_eq!(state.current, Some(QuoteRecord::new("A", "B", &["life"])));
    assert_eq!(state.history.len(), 1);
}
