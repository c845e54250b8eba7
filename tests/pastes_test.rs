//! Integration tests for paste operations.

use txtcrusher::{
    Client, ClientConfig, CreatePasteRequest, Credentials, Expiration, PastebinError, Visibility,
};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn mock_client(server: &MockServer, credentials: Credentials) -> Client {
    Client::with_config(
        credentials,
        ClientConfig {
            base_url: Some(server.uri()),
            ..Default::default()
        },
    )
    .unwrap()
}

fn user_credentials() -> Credentials {
    Credentials::new("dev_key").with_user_key("user_key")
}

/// Decoded form fields of a recorded request, in order.
fn form_fields(request: &Request) -> Vec<(String, String)> {
    url::form_urlencoded::parse(&request.body)
        .into_owned()
        .collect()
}

fn field<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

async fn single_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

#[tokio::test]
async fn test_create_paste() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/api_post.php"))
        .and(body_string_contains("api_option=paste"))
        .respond_with(ResponseTemplate::new(200).set_body_string("https://pastebin.com/UIFdu235s"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server, user_credentials());
    let request = CreatePasteRequest {
        content: "fn main() {\n    println!(\"hi\");\n}".to_string(),
        guest: false,
        title: Some("hello & goodbye".to_string()),
        format: Some("rust".to_string()),
        expiration: Expiration::TenMinutes,
        visibility: Visibility::Private,
    };

    let url = client.pastes().create(&request).await.unwrap();
    assert_eq!(url, "https://pastebin.com/UIFdu235s");

    let fields = form_fields(&single_request(&mock_server).await);
    assert_eq!(field(&fields, "api_dev_key"), Some("dev_key"));
    assert_eq!(field(&fields, "api_user_key"), Some("user_key"));
    assert_eq!(field(&fields, "api_paste_code"), Some(request.content.as_str()));
    assert_eq!(field(&fields, "api_paste_name"), Some("hello & goodbye"));
    assert_eq!(field(&fields, "api_paste_format"), Some("rust"));
    assert_eq!(field(&fields, "api_paste_expire_date"), Some("10M"));
    assert_eq!(field(&fields, "api_paste_private"), Some("2"));
    assert_eq!(field(&fields, "api_option"), Some("paste"));
}

#[tokio::test]
async fn test_create_guest_paste_omits_user_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/api_post.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("https://pastebin.com/guest123"))
        .mount(&mock_server)
        .await;

    // a user key is configured but must not be sent
    let client = mock_client(&mock_server, user_credentials());
    let request = CreatePasteRequest {
        guest: true,
        ..CreatePasteRequest::new("anonymous text")
    };

    let url = client.pastes().create(&request).await.unwrap();
    assert_eq!(url, "https://pastebin.com/guest123");

    let fields = form_fields(&single_request(&mock_server).await);
    assert!(fields.iter().all(|(name, _)| name != "api_user_key"));
    assert_eq!(field(&fields, "api_dev_key"), Some("dev_key"));
    assert_eq!(field(&fields, "api_paste_name"), Some(""));
    assert_eq!(field(&fields, "api_paste_format"), Some("text"));
    assert_eq!(field(&fields, "api_paste_expire_date"), Some("N"));
    assert_eq!(field(&fields, "api_paste_private"), Some("0"));
}

#[tokio::test]
async fn test_create_guest_paste_without_user_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/api_post.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("https://pastebin.com/guest456"))
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server, Credentials::new("dev_key"));
    let request = CreatePasteRequest {
        guest: true,
        ..CreatePasteRequest::new("text")
    };

    assert_eq!(
        client.pastes().create(&request).await.unwrap(),
        "https://pastebin.com/guest456"
    );
}

#[tokio::test]
async fn test_list_limits() {
    let cases: [(i64, &str); 4] = [(0, "50"), (1, "1"), (250, "250"), (1000, "1000")];

    for (limit, sent) in cases {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/api_post.php"))
            .and(body_string_contains("api_option=list"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<paste></paste>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server, user_credentials());
        let listing = client.pastes().list(limit).await.unwrap();
        assert_eq!(listing, "<paste></paste>");

        let fields = form_fields(&single_request(&mock_server).await);
        assert_eq!(field(&fields, "api_results_limit"), Some(sent), "limit {}", limit);
        assert_eq!(field(&fields, "api_user_key"), Some("user_key"));
    }
}

#[tokio::test]
async fn test_list_out_of_range_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("unexpected"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server, user_credentials());

    for limit in [-1000, -1, 1001, i64::MAX] {
        let err = client.pastes().list(limit).await.unwrap_err();
        assert!(matches!(err, PastebinError::InvalidRequest(_)));
    }

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_own_paste() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/api_raw.php"))
        .and(body_string_contains("api_option=show_paste"))
        .and(body_string_contains("api_paste_key=priv4te1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("private content"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server, user_credentials());
    let text = client.pastes().get_own("priv4te1").await.unwrap();
    assert_eq!(text, "private content");
}

#[tokio::test]
async fn test_get_own_paste_permission_denied() {
    let mock_server = MockServer::start().await;
    let denied = "Bad API request, invalid permission to view this paste or invalid api_paste_key";

    Mock::given(method("POST"))
        .and(path("/api/api_raw.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(denied))
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server, user_credentials());
    let err = client.pastes().get_own("someone3").await.unwrap_err();
    assert_eq!(err.service_message(), Some(denied));
    assert!(!err.is_auth_error());
}

#[tokio::test]
async fn test_delete_paste() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/api_post.php"))
        .and(body_string_contains("api_option=delete"))
        .and(body_string_contains("api_paste_key=UIFdu235s"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Paste Removed"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server, user_credentials());
    let reply = client.pastes().delete("UIFdu235s").await.unwrap();
    assert_eq!(reply, "Paste Removed");
}

#[tokio::test]
async fn test_get_public_paste() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/raw/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("public content\n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server, Credentials::anonymous());
    let text = client.pastes().get_public("abc123").await.unwrap();
    assert_eq!(text, "public content\n");

    let request = single_request(&mock_server).await;
    assert!(request.body.is_empty());
    assert_eq!(request.url.query(), None);
}

#[tokio::test]
async fn test_get_public_paste_sends_no_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/raw/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("content"))
        .mount(&mock_server)
        .await;

    // keys are configured but the public path must not use them
    let client = mock_client(&mock_server, user_credentials());
    client.pastes().get_public("abc123").await.unwrap();

    let request = single_request(&mock_server).await;
    assert!(request.body.is_empty());
    assert!(!request.url.as_str().contains("dev_key"));
    assert!(!request.url.as_str().contains("user_key"));
}

#[tokio::test]
async fn test_invalid_paste_key_sends_nothing() {
    let mock_server = MockServer::start().await;

    let client = mock_client(&mock_server, user_credentials());
    assert!(matches!(
        client.pastes().get_public("").await,
        Err(PastebinError::InvalidRequest(_))
    ));
    assert!(matches!(
        client.pastes().delete("a/b").await,
        Err(PastebinError::InvalidRequest(_))
    ));

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
