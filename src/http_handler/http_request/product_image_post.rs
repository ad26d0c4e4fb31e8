use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, MultipartBodyHTTPRequestType,
};
use crate::http_handler::http_response::upload::UploadResponse;
use reqwest::multipart;
use std::io;
use std::path::Path;

/// Multipart upload of a product image to an arbitrary asset endpoint.
/// The payload travels as the single form field `file`.
///
/// Uploads are the one authenticated call in the storefront surface, so
/// the request optionally carries a bearer token.
#[derive(Debug)]
pub struct ProductImageUploadRequest {
    endpoint: String,
    file_name: String,
    bytes: Vec<u8>,
    token: Option<String>,
}

impl ProductImageUploadRequest {
    /// Reads the file at `path` into memory, rejecting paths that do not
    /// point at a regular file.
    pub fn from_file<P: AsRef<Path>>(endpoint: &str, path: P) -> Result<Self, io::Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "File path does not exist"));
        }
        if !path.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "Path is not a valid file"));
        }
        let file_name = path
            .file_name()
            .map_or_else(|| String::from("file"), |name| name.to_string_lossy().to_string());
        Ok(Self {
            endpoint: String::from(endpoint),
            file_name,
            bytes: std::fs::read(path)?,
            token: None,
        })
    }

    /// Wraps an in-memory payload, for callers that already hold the bytes.
    #[must_use]
    pub fn from_bytes(endpoint: &str, file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            endpoint: String::from(endpoint),
            file_name: String::from(file_name),
            bytes,
            token: None,
        }
    }

    /// Attaches the bearer token forwarded with the upload.
    #[must_use]
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(String::from(token));
        self
    }
}

impl MultipartBodyHTTPRequestType for ProductImageUploadRequest {
    fn multipart_body(&self) -> multipart::Part {
        multipart::Part::bytes(self.bytes.clone()).file_name(self.file_name.clone())
    }
}

impl HTTPRequestType for ProductImageUploadRequest {
    type Response = UploadResponse;

    fn endpoint(&self) -> String { self.endpoint.clone() }

    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }

    fn token(&self) -> Option<&str> { self.token.as_deref() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_rejects_missing_path() {
        let result =
            ProductImageUploadRequest::from_file("/api/assets", "/nonexistent/image.jpg");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_from_bytes_carries_token() {
        let request = ProductImageUploadRequest::from_bytes("/api/assets", "a.jpg", vec![1, 2])
            .with_token("t0k");
        assert_eq!(request.token(), Some("t0k"));
        assert_eq!(request.endpoint(), "/api/assets");
    }
}
