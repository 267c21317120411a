use cervantes::config::HttpEnvConfig;
use cervantes::domain::errors::FetchError;
use cervantes::domain::ports::{LanguagePairSource, TranslationHistorySource, TranslationSubmitter};
use cervantes::domain::translation::{TranslationRequest, TranslationStatus};
use cervantes::infrastructure::CervantesApiClient;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use warp::{Filter, Reply};
use warp::http::{StatusCode, Uri};

const HISTORY_HTML: &str =
    "<table class=\"table\"><tr><td>uid0000001</td><td>Hello</td></tr></table>";

type Submissions = Arc<Mutex<Vec<HashMap<String, String>>>>;

fn language_pairs_payload() -> serde_json::Value {
    json!([
        {"lang_pair": {
            "source_language": {"shortname": "en", "name": "English"},
            "target_language": {"shortname": "es", "name": "Spanish"}
        }},
        {"lang_pair": {
            "source_language": {"shortname": "en", "name": "English"},
            "target_language": {"shortname": "fr", "name": "French"}
        }},
        {"lang_pair": {
            "source_language": {"shortname": "de", "name": "German"},
            "target_language": {"shortname": "en", "name": "English"}
        }},
        {"lang_pair": {
            "source_language": {"shortname": "pt", "name": "Portuguese"},
            "target_language": {"shortname": "en", "name": "English"}
        }}
    ])
}

fn records_payload() -> serde_json::Value {
    json!([
        {
            "uid": "uid0000001",
            "status": "completed",
            "source_language": "en",
            "target_language": "es",
            "text": "Hello",
            "translated_text": "Hola",
            "text_length": 5,
            "date_created": "2024-03-01 10:00:00",
            "date_updated": "2024-03-01 10:00:05"
        },
        {
            "uid": "uid0000002",
            "status": "translating",
            "source_language": "en",
            "target_language": "fr",
            "text": "Good morning",
            "translated_text": null,
            "date_created": "2024-03-01 10:01:00",
            "date_updated": "2024-03-01 10:01:00"
        }
    ])
}

/// Serve a backend that behaves like the translation service.
async fn spawn_backend() -> (SocketAddr, Submissions) {
    let submissions: Submissions = Arc::new(Mutex::new(Vec::new()));
    let store = submissions.clone();

    let pairs = warp::get()
        .and(warp::path!("translations" / "language_pairs"))
        .map(|| warp::reply::json(&language_pairs_payload()));

    let history = warp::get()
        .and(warp::path!("translations"))
        .and(warp::query::<HashMap<String, String>>())
        .map(|query: HashMap<String, String>| {
            if query.get("format").map(String::as_str) == Some("json") {
                warp::reply::json(&records_payload()).into_response()
            } else {
                warp::reply::html(HISTORY_HTML).into_response()
            }
        });

    let submit = warp::post()
        .and(warp::path!("translations"))
        .and(warp::body::form::<HashMap<String, String>>())
        .map(move |form: HashMap<String, String>| {
            store.lock().unwrap().push(form);
            warp::redirect::see_other(Uri::from_static("/translations/"))
        });

    let routes = pairs.or(history).or(submit);
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (addr, submissions)
}

/// Serve a backend that answers every request with `status`.
async fn spawn_failing_backend(status: StatusCode) -> SocketAddr {
    let routes = warp::any().map(move || warp::reply::with_status("unavailable", status));
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

fn client_for(base_url: &str) -> CervantesApiClient {
    let config = HttpEnvConfig {
        base_url: base_url.parse().unwrap(),
        ..Default::default()
    };
    CervantesApiClient::new(&config).unwrap()
}

/// Test: Language pairs decode from the wire shape in backend order
#[tokio::test]
async fn test_fetch_language_pairs() {
    let (addr, _) = spawn_backend().await;
    let client = client_for(&format!("http://{}", addr));

    let records = client.fetch_language_pairs().await.unwrap();

    let pairs: Vec<(&str, &str)> = records
        .iter()
        .map(|r| {
            (
                r.source_language.code.as_str(),
                r.target_language.code.as_str(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        vec![("en", "es"), ("en", "fr"), ("de", "en"), ("pt", "en")]
    );
    assert_eq!(records[0].source_language.display_name, "English");
}

/// Test: The history fragment is returned byte for byte
#[tokio::test]
async fn test_fetch_history_html_verbatim() {
    let (addr, _) = spawn_backend().await;
    let client = client_for(&format!("http://{}", addr));

    let html = client.fetch_history_html().await.unwrap();
    assert_eq!(html, HISTORY_HTML);
}

/// Test: `?format=json` yields structured records
#[tokio::test]
async fn test_fetch_history_records() {
    let (addr, _) = spawn_backend().await;
    let client = client_for(&format!("http://{}", addr));

    let records = client.fetch_history_records().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].status, TranslationStatus::Completed);
    assert_eq!(records[0].translated_text.as_deref(), Some("Hola"));
    assert!(records[1].status.is_pending());
    assert_eq!(records[1].text_length, 0);
}

/// Test: Submission posts the form fields and accepts the redirect
#[tokio::test]
async fn test_submit_translation_posts_form() {
    let (addr, submissions) = spawn_backend().await;
    let client = client_for(&format!("http://{}", addr));

    client
        .submit_translation(&TranslationRequest::new("en", "es", "Hello & welcome"))
        .await
        .unwrap();

    let received = submissions.lock().unwrap().clone();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["source-language"], "en");
    assert_eq!(received[0]["target-language"], "es");
    assert_eq!(received[0]["text"], "Hello & welcome");
}

/// Test: A base URL with a path prefix keeps its prefix
#[tokio::test]
async fn test_base_url_path_prefix() {
    let routes = warp::path!("api" / "translations" / "language_pairs")
        .map(|| warp::reply::json(&language_pairs_payload()));
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let client = client_for(&format!("http://{}/api", addr));
    let records = client.fetch_language_pairs().await.unwrap();
    assert_eq!(records.len(), 4);
}

/// Test: Any status other than 200 is an HTTP failure
#[tokio::test]
async fn test_non_ok_status_is_http_failure() {
    let addr = spawn_failing_backend(StatusCode::SERVICE_UNAVAILABLE).await;
    let client = client_for(&format!("http://{}", addr));

    match client.fetch_language_pairs().await {
        Err(FetchError::Http { endpoint, status }) => {
            assert_eq!(endpoint, "translations/language_pairs");
            assert_eq!(status, 503);
        }
        other => panic!("expected HTTP failure, got {:?}", other),
    }

    match client.fetch_history_html().await {
        Err(FetchError::Http { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected HTTP failure, got {:?}", other),
    }
}

/// Test: A 2xx other than 200 is still a failure for the fetches
#[tokio::test]
async fn test_no_content_is_http_failure() {
    let addr = spawn_failing_backend(StatusCode::NO_CONTENT).await;
    let client = client_for(&format!("http://{}", addr));

    assert!(matches!(
        client.fetch_history_html().await,
        Err(FetchError::Http { status: 204, .. })
    ));
}

/// Test: Rejected submissions surface the status
#[tokio::test]
async fn test_submit_translation_failure() {
    let addr = spawn_failing_backend(StatusCode::INTERNAL_SERVER_ERROR).await;
    let client = client_for(&format!("http://{}", addr));

    let result = client
        .submit_translation(&TranslationRequest::new("en", "es", "Hello"))
        .await;
    assert!(matches!(result, Err(FetchError::Http { status: 500, .. })));
}

/// Serve `body` as the language-pairs response.
fn spawn_pairs_backend(body: &'static str) -> SocketAddr {
    let routes = warp::path!("translations" / "language_pairs").map(move || {
        warp::reply::with_header(body, "content-type", "application/json")
    });
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

/// Test: A JSON body that is not a list yields no pairs
#[tokio::test]
async fn test_non_list_payload_yields_no_pairs() {
    for body in [r#"{"objects": []}"#, "null"] {
        let client = client_for(&format!("http://{}", spawn_pairs_backend(body)));
        assert!(client.fetch_language_pairs().await.unwrap().is_empty());
    }
}

/// Test: One entry missing fields discards the whole list
#[tokio::test]
async fn test_malformed_entry_yields_no_pairs() {
    let body = r#"[
        {"lang_pair": {"source_language": {"shortname": "en", "name": "English"},
                       "target_language": {"shortname": "es", "name": "Spanish"}}},
        {"lang_pair": {"source_language": {"shortname": "de", "name": "German"}}}
    ]"#;
    let client = client_for(&format!("http://{}", spawn_pairs_backend(body)));
    assert!(client.fetch_language_pairs().await.unwrap().is_empty());
}

/// Test: A body that is not JSON is a transport failure
#[tokio::test]
async fn test_invalid_json_is_transport_failure() {
    let client = client_for(&format!("http://{}", spawn_pairs_backend("<html>down</html>")));
    assert!(matches!(
        client.fetch_language_pairs().await,
        Err(FetchError::Transport { .. })
    ));
}

/// Test: Nothing listening is a transport failure
#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = client_for(&format!("http://{}", addr));

    match client.fetch_language_pairs().await {
        Err(FetchError::Transport { endpoint, .. }) => {
            assert_eq!(endpoint, "translations/language_pairs")
        }
        other => panic!("expected transport failure, got {:?}", other),
    }
}
