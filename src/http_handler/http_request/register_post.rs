use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::auth::RegisterResponse;

/// Account creation request for the registration form.
#[derive(Debug, serde::Serialize)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

impl RegisterRequest {
    #[must_use]
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: String::from(name),
            email: String::from(email),
            password: String::from(password),
        }
    }
}

impl JSONBodyHTTPRequestType for RegisterRequest {
    type Body = Self;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for RegisterRequest {
    type Response = RegisterResponse;

    fn endpoint(&self) -> String { String::from("/api/auth/register") }

    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
