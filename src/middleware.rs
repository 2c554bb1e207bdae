//! Crash-report middleware.
//!
//! # Responsibilities
//! - Catch a panic unwinding out of the wrapped service's future
//! - Report it to the remote sink
//! - Re-raise it unchanged
//!
//! # Design Decisions
//! - Observe and forward only; recovery (returning a 500, shutting down)
//!   stays with the server's own panic handling above this layer
//! - Generic over the request type, so it works with any tower stack

use std::any::Any;
use std::panic::{resume_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tower::{Layer, Service};

use crate::sinks::RemoteSink;

/// Tower layer produced by
/// [`Logger::crash_report_layer`](crate::Logger::crash_report_layer).
#[derive(Clone)]
pub struct CrashReportLayer {
    remote: Arc<dyn RemoteSink>,
}

impl CrashReportLayer {
    pub(crate) fn new(remote: Arc<dyn RemoteSink>) -> Self {
        Self { remote }
    }
}

impl<S> Layer<S> for CrashReportLayer {
    type Service = CrashReportService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CrashReportService {
            inner,
            remote: self.remote.clone(),
        }
    }
}

/// Service wrapper applied by [`CrashReportLayer`].
#[derive(Clone)]
pub struct CrashReportService<S> {
    inner: S,
    remote: Arc<dyn RemoteSink>,
}

impl<S, Req> Service<Req> for CrashReportService<S>
where
    S: Service<Req>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<S::Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), S::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Req) -> Self::Future {
        let remote = self.remote.clone();
        let fut = self.inner.call(req);
        Box::pin(async move {
            match AssertUnwindSafe(fut).catch_unwind().await {
                Ok(result) => result,
                Err(payload) => {
                    remote.capture_panic(panic_text(payload.as_ref()));
                    resume_unwind(payload)
                }
            }
        })
    }
}

fn panic_text(payload: &(dyn Any + Send)) -> &str {
    if let Some(text) = payload.downcast_ref::<&str>() {
        text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text
    } else {
        "non-string panic payload"
    }
}
