/// Response for asset uploads. The backend describes the stored asset;
/// only the public URL is read back, when present.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UploadResponse {
    url: Option<String>,
}

impl UploadResponse {
    pub fn url(&self) -> Option<&str> { self.url.as_deref() }
}
