//! Integration test: build the router over a stub completion service and
//! exercise `POST /api/chat`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use parley_api::{AppState, router};
use parley_core::{CompletionClient, CompletionError};
use serde_json::{Value, json};
use tower::ServiceExt;

/// How the stub answers.
enum Behaviour {
    Reply(&'static str),
    Fail(fn() -> CompletionError),
}

struct StubCompletion {
    behaviour: Behaviour,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubCompletion {
    fn new(behaviour: Behaviour) -> Arc<Self> {
        Arc::new(Self {
            behaviour,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for StubCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().expect("lock") = Some(prompt.to_string());
        match &self.behaviour {
            Behaviour::Reply(text) => Ok(text.to_string()),
            Behaviour::Fail(make) => Err(make()),
        }
    }
}

fn chat_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(stub: Arc<StubCompletion>, req: Request<Body>) -> (StatusCode, Value) {
    let app = router(AppState::with_client(stub));
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).expect("parse JSON");
    (status, json)
}

#[tokio::test]
async fn successful_completion_returns_trimmed_reply() {
    let stub = StubCompletion::new(Behaviour::Reply("\n  Try a chatbot on your landing page.  \n"));

    let (status, json) = send(
        stub.clone(),
        chat_request(json!({"prompt": "What AI-tools can improve my website?"}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"reply": "Try a chatbot on your landing page."}));
    assert_eq!(stub.calls(), 1);
    assert_eq!(
        stub.last_prompt.lock().expect("lock").as_deref(),
        Some("What AI-tools can improve my website?")
    );
}

#[tokio::test]
async fn prompt_is_forwarded_untrimmed() {
    let stub = StubCompletion::new(Behaviour::Reply("ok"));

    let (status, _) = send(stub.clone(), chat_request(r#"{"prompt":"  spaced  "}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stub.last_prompt.lock().expect("lock").as_deref(),
        Some("  spaced  ")
    );
}

#[tokio::test]
async fn missing_or_empty_prompt_is_rejected() {
    for body in [
        r#"{}"#,
        r#"{"prompt":""}"#,
        r#"{"prompt":null}"#,
        r#"{"prompt":42}"#,
        r#"not json"#,
        "",
    ] {
        let stub = StubCompletion::new(Behaviour::Reply("unused"));
        let (status, json) = send(stub.clone(), chat_request(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body:?}");
        assert_eq!(json, json!({"error": "Prompt is required"}), "body: {body:?}");
        assert_eq!(stub.calls(), 0, "upstream must not be called for {body:?}");
    }
}

#[tokio::test]
async fn non_json_content_type_is_treated_as_missing_prompt() {
    for content_type in [Some("text/plain"), None] {
        let stub = StubCompletion::new(Behaviour::Reply("unused"));
        let mut builder = Request::builder().method("POST").uri("/api/chat");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(r#"{"prompt":"Hello"}"#)).unwrap();

        let (status, json) = send(stub.clone(), req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "content type: {content_type:?}");
        assert_eq!(json, json!({"error": "Prompt is required"}));
        assert_eq!(stub.calls(), 0);
    }
}

#[tokio::test]
async fn json_content_type_with_charset_is_accepted() {
    let stub = StubCompletion::new(Behaviour::Reply("hi"));
    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
        .body(Body::from(r#"{"prompt":"Hello"}"#))
        .unwrap();

    let (status, json) = send(stub.clone(), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"reply": "hi"}));
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn upstream_failure_returns_generic_error() {
    let failures: [fn() -> CompletionError; 4] = [
        || CompletionError::Status {
            status: 401,
            body: r#"{"error":{"message":"Incorrect API key provided"}}"#.into(),
        },
        || CompletionError::Status {
            status: 429,
            body: "quota exceeded".into(),
        },
        || CompletionError::Decode("expected value at line 1".into()),
        || CompletionError::EmptyChoices,
    ];

    for make in failures {
        let stub = StubCompletion::new(Behaviour::Fail(make));
        let (status, json) = send(stub, chat_request(r#"{"prompt":"Hello"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({"error": "Error processing the request"}));
    }
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let stub = StubCompletion::new(Behaviour::Reply("hi"));
    let app = router(AppState::with_client(stub));

    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::ORIGIN, "http://example.com")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"prompt":"Hello"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.expect("request");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn only_post_is_routed() {
    let stub = StubCompletion::new(Behaviour::Reply("hi"));
    let app = router(AppState::with_client(stub.clone()));

    let req = Request::builder()
        .method("GET")
        .uri("/api/chat")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.expect("request");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let stub = StubCompletion::new(Behaviour::Reply(" same "));
    let app = router(AppState::with_client(stub.clone()));

    let (a, b) = tokio::join!(
        app.clone().oneshot(chat_request(r#"{"prompt":"one"}"#)),
        app.oneshot(chat_request(r#"{"prompt":"two"}"#)),
    );

    assert_eq!(a.expect("first").status(), StatusCode::OK);
    assert_eq!(b.expect("second").status(), StatusCode::OK);
    assert_eq!(stub.calls(), 2);
}
