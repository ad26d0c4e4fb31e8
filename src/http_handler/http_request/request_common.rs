use super::super::http_client::HTTPClient;
use super::super::http_response::response_common::ResponseError;
use reqwest::multipart;

/// HTTP verb of a request descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Serializes to the empty JSON object, the default payload for POST/PUT
/// requests issued without a body.
#[derive(serde::Serialize)]
pub(crate) struct EmptyBody {}

/// A logical call against one backend endpoint: where it goes, which verb
/// it uses, which response record it decodes into, and optionally which
/// bearer token it carries.
pub trait HTTPRequestType {
    type Response: for<'de> serde::Deserialize<'de>;
    fn endpoint(&self) -> String;
    fn request_method(&self) -> HTTPRequestMethod;
    fn token(&self) -> Option<&str> { None }
}

/// Endpoints that send no payload of their own. POST/PUT implementors fall
/// back to the empty-object body.
#[allow(async_fn_in_trait)]
pub trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(&self, client: &HTTPClient) -> Result<Self::Response, ResponseError> {
        let endpoint = self.endpoint();
        match self.request_method() {
            HTTPRequestMethod::Get => client.get(&endpoint, self.token()).await,
            HTTPRequestMethod::Delete => client.delete(&endpoint, self.token()).await,
            HTTPRequestMethod::Post => {
                client.post::<EmptyBody, _>(&endpoint, None, self.token()).await
            }
            HTTPRequestMethod::Put => {
                client.put::<EmptyBody, _>(&endpoint, None, self.token()).await
            }
        }
    }
}

/// Endpoints that serialize a JSON body. GET and DELETE carry no payload,
/// so implementors declaring those verbs send without one.
#[allow(async_fn_in_trait)]
pub trait JSONBodyHTTPRequestType: HTTPRequestType {
    type Body: serde::Serialize;
    fn body(&self) -> &Self::Body;

    async fn send_request(&self, client: &HTTPClient) -> Result<Self::Response, ResponseError> {
        let endpoint = self.endpoint();
        match self.request_method() {
            HTTPRequestMethod::Post => {
                client.post(&endpoint, Some(self.body()), self.token()).await
            }
            HTTPRequestMethod::Put => client.put(&endpoint, Some(self.body()), self.token()).await,
            HTTPRequestMethod::Get => client.get(&endpoint, self.token()).await,
            HTTPRequestMethod::Delete => client.delete(&endpoint, self.token()).await,
        }
    }
}

/// Endpoints that upload a binary payload as the single multipart form
/// field `file`. No JSON content-type is set on these requests; the
/// transport supplies the multipart boundary header itself.
#[allow(async_fn_in_trait)]
pub trait MultipartBodyHTTPRequestType: HTTPRequestType {
    fn multipart_body(&self) -> multipart::Part;

    async fn send_request(&self, client: &HTTPClient) -> Result<Self::Response, ResponseError> {
        client.upload(&self.endpoint(), self.multipart_body(), self.token()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_serializes_to_empty_object() {
        assert_eq!(serde_json::to_string(&EmptyBody {}).unwrap(), "{}");
    }
}
