/// Successful login payload. Only the token is contractual; anything else
/// the backend sends alongside is ignored. The token itself is opaque and
/// forwarded verbatim on authenticated calls; the client never stores it.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginResponse {
    token: String,
}

impl LoginResponse {
    pub fn token(&self) -> &str { self.token.as_str() }
    pub fn into_token(self) -> String { self.token }
}

/// Registration acknowledgement. The body shape is backend-defined and the
/// calling pages only care that the request succeeded.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RegisterResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_ignores_extra_fields() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token":"t0k","user":{"id":1}}"#).unwrap();
        assert_eq!(response.token(), "t0k");
    }

    #[test]
    fn test_login_response_requires_token() {
        let parsed: Result<LoginResponse, _> = serde_json::from_str(r#"{"user":{"id":1}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_register_response_accepts_arbitrary_object() {
        let parsed: Result<RegisterResponse, _> =
            serde_json::from_str(r#"{"ok":true,"id":12}"#);
        assert!(parsed.is_ok());
    }
}
