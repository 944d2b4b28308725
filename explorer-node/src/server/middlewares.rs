use std::time::Instant;

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, Request, Response};
use axum::middleware::Next;

pub const SERVER_TIMING: HeaderName = HeaderName::from_static("server-timing");

/// Logs every request with its status and latency, and exposes the latency to
/// browsers through a `Server-Timing` header.
pub async fn track_timing(req: Request<Body>, next: Next) -> Response<Body> {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let mut response = next.run(req).await;

    let elapsed = start.elapsed();
    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        "🌐 served in {:?}",
        elapsed
    );

    let timing = format!("app;dur={:.3}", elapsed.as_secs_f64() * 1000.0);
    if let Ok(value) = HeaderValue::from_str(&timing) {
        response.headers_mut().insert(SERVER_TIMING, value);
    }

    response
}

pub trait TimingLayer {
    fn with_timing(self) -> Self;
}

impl TimingLayer for axum::Router {
    fn with_timing(self) -> Self {
        self.layer(axum::middleware::from_fn(track_timing))
    }
}
