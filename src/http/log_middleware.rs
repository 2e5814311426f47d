use std::time::Instant;

use http::Extensions;
use log::{debug, warn};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Logs every upstream portal request with its outcome and duration.
///
/// Query strings are left out of the log line; form bodies are never logged.
pub struct RequestLogMiddleware;

#[async_trait::async_trait]
impl Middleware for RequestLogMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let path = req.url().path().to_string();
        let started = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed = started.elapsed().as_millis();

        match &result {
            Ok(response) => debug!(
                "{} {} -> {} ({} ms, landed on {})",
                method,
                path,
                response.status(),
                elapsed,
                response.url().path()
            ),
            Err(err) => warn!("{} {} failed after {} ms: {}", method, path, elapsed, err),
        }

        result
    }
}
