//! Integration tests for the crash-report middleware on an axum router.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use tower::ServiceExt;

use logbridge::sinks::{LocalSink, RemoteSink};
use logbridge::{Level, Logger, LoggerOptions};

#[derive(Default)]
struct NullLocal;

impl LocalSink for NullLocal {
    fn write_line(&self, _level: Level, _line: &str) {}
}

#[derive(Default)]
struct RecordingRemote {
    messages: Mutex<Vec<String>>,
    panics: Mutex<Vec<String>>,
}

impl RemoteSink for RecordingRemote {
    fn capture_message(&self, _level: Level, text: &str) {
        self.messages.lock().unwrap().push(text.to_string());
    }

    fn capture_error(&self, err: &dyn std::error::Error) {
        self.messages.lock().unwrap().push(err.to_string());
    }

    fn capture_panic(&self, payload: &str) {
        self.panics.lock().unwrap().push(payload.to_string());
    }
}

async fn boom_handler() -> () {
    panic!("handler exploded")
}

fn crash_reporting_router(remote: Arc<RecordingRemote>) -> Router {
    let logger = Logger::with_local_sink(Arc::new(NullLocal));
    logger
        .configure_with_sink(
            LoggerOptions {
                module_name: "crash-test".into(),
                remote_enabled: true,
                ..Default::default()
            },
            remote,
        )
        .unwrap();

    Router::new()
        .route("/ok", get(|| async { "fine" }))
        .route("/boom", get(boom_handler))
        .layer(logger.crash_report_layer())
}

#[tokio::test]
async fn test_passthrough_on_success() {
    let remote = Arc::new(RecordingRemote::default());
    let app = crash_reporting_router(remote.clone());

    let response = app
        .oneshot(Request::builder().uri("/ok").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(remote.panics.lock().unwrap().is_empty());
    assert!(remote.messages.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_reports_panic_and_repanics() {
    let remote = Arc::new(RecordingRemote::default());
    let app = crash_reporting_router(remote.clone());

    let request = Request::builder().uri("/boom").body(Body::empty()).unwrap();
    let join = tokio::spawn(app.oneshot(request)).await;

    // The panic must propagate out of the request future after capture.
    let err = join.unwrap_err();
    assert!(err.is_panic());

    assert_eq!(
        remote.panics.lock().unwrap().as_slice(),
        ["handler exploded"]
    );
}
