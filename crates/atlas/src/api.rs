use gloo_net::http::Response;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalServerError,
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Default)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
}

impl From<ApiHeaders> for gloo_net::http::Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0 {
            headers.set(&key, &value);
        }
        headers
    }
}

/// Maps an HTTP status to success or the matching [`ApiError`].
pub fn check_status(status: u16, endpoint: &str) -> ApiResult<()> {
    match status {
        200..=299 => Ok(()),
        400 => Err(ApiError::BadRequest(format!("Bad request to {endpoint}"))),
        404 => Err(ApiError::NotFound(format!("{endpoint} not found"))),
        500..=599 => Err(ApiError::InternalServerError),
        status => Err(ApiError::UnexpectedStatusCode(status)),
    }
}

async fn handle_json_response<T>(response: Response, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    check_status(response.status(), endpoint)?;
    response.json::<T>().await.map_err(ApiError::ParseError)
}

/// Read-only JSON client.
#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    async fn make_request(&self, endpoint: &str) -> ApiResult<Response>;

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;
}

pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        let mut headers = ApiHeaders::new();
        headers.insert("Accept", "application/json");
        Self {
            root_url: root_url.into(),
            headers,
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.root_url, endpoint)
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn make_request(&self, endpoint: &str) -> ApiResult<Response> {
        let url = self.url(endpoint);
        tracing::debug!("GET {url}");

        gloo_net::http::Request::get(&url)
            .headers(self.headers.clone().into())
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(endpoint).await?;
        handle_json_response(response, endpoint).await.inspect_err(|err| {
            tracing::warn!("Request to {endpoint} failed: {err}");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(check_status(200, "/all").is_ok());
        assert!(check_status(204, "/all").is_ok());
        assert!(matches!(check_status(400, "/all"), Err(ApiError::BadRequest(_))));
        assert!(check_status(404, "/name/Atlantis").unwrap_err().is_not_found());
        assert!(matches!(check_status(503, "/all"), Err(ApiError::InternalServerError)));
        assert!(matches!(
            check_status(302, "/all"),
            Err(ApiError::UnexpectedStatusCode(302))
        ));
    }

    #[test]
    fn test_url_joins_root_and_endpoint() {
        let client = HttpApiClient::new("https://restcountries.com/v3.1");
        assert_eq!(
            client.url("/name/France?fullText=true"),
            "https://restcountries.com/v3.1/name/France?fullText=true"
        );
    }

    #[test]
    fn test_not_found_message_names_endpoint() {
        let err = check_status(404, "/name/Atlantis").unwrap_err();
        assert_eq!(err.to_string(), "Not Found: /name/Atlantis not found");
    }
}
