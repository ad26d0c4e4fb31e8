use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::auth::LoginResponse;

/// Credential submission for the login form. Credentials travel as the
/// JSON body; the backend answers with an opaque bearer token.
#[derive(Debug, serde::Serialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: String::from(email), password: String::from(password) }
    }
}

impl JSONBodyHTTPRequestType for LoginRequest {
    type Body = Self;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for LoginRequest {
    type Response = LoginResponse;

    fn endpoint(&self) -> String { String::from("/api/auth/login") }

    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_body_shape() {
        let request = LoginRequest::new("jo@example.com", "hunter2");
        let body = serde_json::to_value(request.body()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "email": "jo@example.com", "password": "hunter2" })
        );
    }
}
