use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// GET request envelope used by the bundle fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    /// `None` waits until the connection itself resolves or fails.
    pub timeout_ms: Option<u64>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            timeout_ms: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// HTTP response envelope returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok_json(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

/// Transport-level HTTP error: the request never produced a readable response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Transport contract for the fetcher.
pub trait HttpClient: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;
}

/// Production HTTP client using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestHttpClient {
    pub fn new(user_agent: &str) -> Self {
        Self {
            client: Arc::new(
                reqwest::Client::builder()
                    .user_agent(user_agent)
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new()),
            ),
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            let mut builder = self.client.get(&request.url);

            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            if let Some(timeout_ms) = request.timeout_ms {
                builder = builder.timeout(Duration::from_millis(timeout_ms));
            }

            let response = builder.send().await.map_err(|e| {
                if e.is_timeout() {
                    HttpError::new(format!("request timeout: {e}"))
                } else if e.is_connect() {
                    HttpError::new(format!("connection failed: {e}"))
                } else {
                    HttpError::new(format!("request failed: {e}"))
                }
            })?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| HttpError::new(format!("failed to read response body: {e}")))?;

            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
struct StaticRoute {
    result: Result<HttpResponse, HttpError>,
    delay: Option<Duration>,
}

/// Canned-response transport for deterministic offline tests.
///
/// Unregistered URLs fail with a connection-refused transport error.
#[derive(Debug, Default)]
pub struct StaticHttpClient {
    routes: BTreeMap<String, StaticRoute>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StaticHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: impl Into<String>, response: HttpResponse) -> Self {
        self.routes.insert(
            url.into(),
            StaticRoute {
                result: Ok(response),
                delay: None,
            },
        );
        self
    }

    pub fn with_failure(mut self, url: impl Into<String>, error: HttpError) -> Self {
        self.routes.insert(
            url.into(),
            StaticRoute {
                result: Err(error),
                delay: None,
            },
        );
        self
    }

    /// Delay the answer for an already registered URL.
    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        if let Some(route) = self.routes.get_mut(url) {
            route.delay = Some(delay);
        }
        self
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HttpClient for StaticHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let route = self.routes.get(&request.url).cloned();
        let url = request.url.clone();
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        Box::pin(async move {
            let Some(route) = route else {
                return Err(HttpError::new(format!("connection failed: {url} refused")));
            };
            if let Some(delay) = route.delay {
                tokio::time::sleep(delay).await;
            }
            route.result
        })
    }
}
