use super::http_request::request_common::EmptyBody;
use super::http_response::response_common::{
    ResponseError, unwrap_return_code, unwrap_return_code_with_detail,
};
use reqwest::RequestBuilder;
use reqwest::header::CONTENT_TYPE;

/// Environment variable consulted once at startup for the backend location.
pub const BASE_URL_ENV: &str = "BACKEND_URL";
/// Local development backend, used when [`BASE_URL_ENV`] is unset or empty.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// A thin wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base address.
///
/// Endpoint paths are resolved against the base address by plain
/// concatenation; the client does not validate their shape. It holds no
/// mutable state of its own, so every call is an independent
/// request/response pair with no retries, caching, or logging.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base address for the API, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` against the given base address
    /// (e.g. `"http://localhost:8000"`).
    #[must_use]
    pub fn new(base_url: &str) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::new(),
            base_url: String::from(base_url),
        }
    }

    /// Constructs a client against the base address resolved from the
    /// process environment. The lookup happens once, here; the address is
    /// immutable for the life of the client.
    #[must_use]
    pub fn from_env() -> HTTPClient {
        HTTPClient::new(&resolve_base_url(std::env::var(BASE_URL_ENV).ok()))
    }

    /// Returns the base address that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }

    fn join(&self, path: &str) -> String { format!("{}{path}", self.base_url) }

    /// Attaches `Authorization: Bearer <token>` when a non-empty token is
    /// supplied; otherwise the header is omitted entirely.
    fn with_auth(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Issues a GET against `base + path` and decodes the JSON response.
    ///
    /// Non-success statuses fail with the bare numeric status code as the
    /// message, without reading the response body.
    pub async fn get<R>(&self, path: &str, token: Option<&str>) -> Result<R, ResponseError>
    where R: for<'de> serde::Deserialize<'de> {
        let request = Self::with_auth(self.client.get(self.join(path)), token)
            .header(CONTENT_TYPE, "application/json");
        let response = unwrap_return_code(request.send().await?)?;
        Ok(response.json::<R>().await?)
    }

    /// Issues a DELETE with GET's header and error semantics.
    pub async fn delete<R>(&self, path: &str, token: Option<&str>) -> Result<R, ResponseError>
    where R: for<'de> serde::Deserialize<'de> {
        let request = Self::with_auth(self.client.delete(self.join(path)), token)
            .header(CONTENT_TYPE, "application/json");
        let response = unwrap_return_code(request.send().await?)?;
        Ok(response.json::<R>().await?)
    }

    /// Issues a POST with `body` serialized as JSON, defaulting to the
    /// empty object when absent.
    ///
    /// POST is the one verb with the richer failure path: the error body is
    /// searched for a `detail` or `message` string before falling back to
    /// the numeric status code. Callers depend on the differing message
    /// shapes between verbs, so this asymmetry is contractual.
    pub async fn post<B, R>(
        &self,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<R, ResponseError>
    where
        B: serde::Serialize + ?Sized,
        R: for<'de> serde::Deserialize<'de>,
    {
        let request = Self::with_auth(self.client.post(self.join(path)), token);
        let request = match body {
            Some(body) => request.json(body),
            None => request.json(&EmptyBody {}),
        };
        let response = unwrap_return_code_with_detail(request.send().await?).await?;
        Ok(response.json::<R>().await?)
    }

    /// Issues a PUT with `body` serialized as JSON, defaulting to the empty
    /// object when absent. Failures carry the bare status code, like GET.
    pub async fn put<B, R>(
        &self,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<R, ResponseError>
    where
        B: serde::Serialize + ?Sized,
        R: for<'de> serde::Deserialize<'de>,
    {
        let request = Self::with_auth(self.client.put(self.join(path)), token);
        let request = match body {
            Some(body) => request.json(body),
            None => request.json(&EmptyBody {}),
        };
        let response = unwrap_return_code(request.send().await?)?;
        Ok(response.json::<R>().await?)
    }

    /// Issues a multipart POST carrying `file` as the single form field
    /// named `file`. No JSON content-type is set; the transport supplies
    /// the multipart boundary header itself. Failures carry the bare
    /// status code.
    pub async fn upload<R>(
        &self,
        path: &str,
        file: reqwest::multipart::Part,
        token: Option<&str>,
    ) -> Result<R, ResponseError>
    where R: for<'de> serde::Deserialize<'de> {
        let form = reqwest::multipart::Form::new().part("file", file);
        let request = Self::with_auth(self.client.post(self.join(path)), token).multipart(form);
        let response = unwrap_return_code(request.send().await?)?;
        Ok(response.json::<R>().await?)
    }
}

/// One-shot base address resolution: a set, non-empty override wins,
/// otherwise the local development default applies.
fn resolve_base_url(var: Option<String>) -> String {
    var.filter(|v| !v.is_empty()).unwrap_or_else(|| String::from(DEFAULT_BASE_URL))
}
