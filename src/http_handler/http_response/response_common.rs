use strum_macros::Display;

/// Failure-body shape conventionally returned by the backend: a
/// human-readable explanation under `detail` or `message`.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
}

/// The single failure type surfaced by every client operation.
///
/// `Display` yields exactly the user-facing message: the numeric status
/// code, a server-provided detail string (POST only), or the transport's
/// own description. Callers decide whether to ignore, display, or alert;
/// the client never retries, swallows, or logs.
#[derive(Debug, Display)]
pub enum ResponseError {
    /// Non-success HTTP status. The payload is the message.
    #[strum(to_string = "{0}")]
    Status(String),
    /// Transport-level failure (connect, abort, malformed JSON in a
    /// success body), propagated unwrapped.
    #[strum(to_string = "{0}")]
    Transport(reqwest::Error),
}

impl ResponseError {
    /// The human-readable message callers display or ignore.
    #[must_use]
    pub fn message(&self) -> String { self.to_string() }
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self { ResponseError::Transport(value) }
}

/// Passes success responses (status 200-299) through and converts anything
/// else into a failure carrying the bare status code. The body is not read.
pub(crate) fn unwrap_return_code(
    response: reqwest::Response,
) -> Result<reqwest::Response, ResponseError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ResponseError::Status(String::from(response.status().as_str())))
    }
}

/// POST's richer variant: on a non-success status, tries to extract a
/// non-empty `detail` or `message` string from the response body before
/// falling back to the bare status code. The other verbs keep the terse
/// form; the asymmetry is contractual, not an oversight to unify.
pub(crate) async fn unwrap_return_code_with_detail(
    response: reqwest::Response,
) -> Result<reqwest::Response, ResponseError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let fallback = String::from(status.as_str());
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| {
            body.detail
                .filter(|d| !d.is_empty())
                .or_else(|| body.message.filter(|m| !m.is_empty()))
        })
        .unwrap_or(fallback);
    Err(ResponseError::Status(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_prefers_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"invalid email","message":"other"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("invalid email"));
    }

    #[test]
    fn test_error_body_tolerates_extra_fields() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"nope","code":42}"#).unwrap();
        assert!(body.detail.is_none());
        assert_eq!(body.message.as_deref(), Some("nope"));
    }

    #[test]
    fn test_error_body_rejects_non_string_detail() {
        let parsed: Result<ErrorBody, _> = serde_json::from_str(r#"{"detail":[1,2]}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_status_error_displays_message_only() {
        let err = ResponseError::Status(String::from("404"));
        assert_eq!(err.to_string(), "404");
        assert_eq!(err.message(), "404");
    }
}
