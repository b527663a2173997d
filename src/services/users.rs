//! User listing

use async_trait::async_trait;

use super::UserApi;
use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::User;

#[derive(Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl UserApi for UserService {
    async fn get_all(&self) -> ApiResult<Vec<User>> {
        self.client.get("/users").await
    }
}
