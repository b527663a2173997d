//! Login, profile and logout

use async_trait::async_trait;

use super::AuthApi;
use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{LoginRequest, LoginResponse, User};

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl AuthApi for AuthService {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.client.post_json("/auth/login", request).await
    }

    async fn profile(&self) -> ApiResult<User> {
        self.client.get("/auth/profile").await
    }

    async fn logout(&self) -> ApiResult<()> {
        self.client.post_unit("/auth/logout").await
    }
}
