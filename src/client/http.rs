//! Backend REST Client
//!
//! One configured HTTP client shared by every service. Requests carry the
//! session cookies (credentials mode "include"), make a single attempt and
//! have no client-side timeout.

use reqwest::cookie::{CookieStore, Jar};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use url::Url;

use crate::error::{ApiError, ApiResult};
use crate::models::{FormField, MultipartBody};

/// Header used to correlate panel requests with backend logs
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// HTTP client for the game backend
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    jar: Arc<Jar>,
}

impl ApiClient {
    /// Create a client for the given backend base URL
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Self::with_cookies(base_url, None)
    }

    /// Create a client, seeding the cookie jar with a saved `Cookie` header
    /// value (`name=value; other=value`)
    pub fn with_cookies(base_url: &str, cookie_header: Option<&str>) -> ApiResult<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let jar = Arc::new(Jar::default());
        if let Some(header) = cookie_header {
            for cookie in header.split(';').map(str::trim).filter(|c| !c.is_empty()) {
                jar.add_cookie_str(cookie, &base_url);
            }
        }

        let http = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .user_agent(concat!("dreamworks-panel/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            jar,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Cookies currently held for the backend, as a `Cookie` header value
    pub fn cookie_header(&self) -> Option<String> {
        self.jar
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    fn url(&self, path: &str) -> ApiResult<Url> {
        let raw = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let url = self.url(path)?;
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::debug!(method = %method, url = %url, request_id = %request_id, "API request");

        Ok(self
            .http
            .request(method, url)
            .header(REQUEST_ID_HEADER, request_id))
    }

    /// GET a JSON resource
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(self.request(Method::GET, path)?).await?;
        decode(response).await
    }

    /// POST a JSON body
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.request(Method::POST, path)?.json(body))
            .await?;
        decode(response).await
    }

    /// PATCH a JSON body
    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.request(Method::PATCH, path)?.json(body))
            .await?;
        decode(response).await
    }

    /// POST a multipart form
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        body: MultipartBody,
    ) -> ApiResult<T> {
        let form = to_form(body)?;
        let response = self
            .send(self.request(Method::POST, path)?.multipart(form))
            .await?;
        decode(response).await
    }

    /// PATCH a multipart form
    pub async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        body: MultipartBody,
    ) -> ApiResult<T> {
        let form = to_form(body)?;
        let response = self
            .send(self.request(Method::PATCH, path)?.multipart(form))
            .await?;
        decode(response).await
    }

    /// DELETE and decode the returned entity
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(self.request(Method::DELETE, path)?).await?;
        decode(response).await
    }

    /// DELETE, ignoring any response body
    pub async fn delete_unit(&self, path: &str) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, path)?).await?;
        Ok(())
    }

    /// POST without a body, ignoring any response body
    pub async fn post_unit(&self, path: &str) -> ApiResult<()> {
        self.send(self.request(Method::POST, path)?).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "API request failed");
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &text);
        tracing::warn!(status = status.as_u16(), error = %err, "API returned error");
        Err(err)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ApiError::from)
}

/// Convert the field list into a reqwest multipart form
fn to_form(body: MultipartBody) -> ApiResult<Form> {
    let mut form = Form::new();

    for field in body.into_fields() {
        form = match field {
            FormField::Text { name, value } => form.text(name, value),
            FormField::File { name, file } => {
                let part = Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.content_type)
                    .map_err(|e| ApiError::Decode(format!("Invalid content type: {}", e)))?;
                form.part(name, part)
            }
        };
    }

    Ok(form)
}
