//! Game mode service over the REST client

use async_trait::async_trait;

use super::GameModeApi;
use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{EntityId, GameMode, GameModeDto};

#[derive(Clone)]
pub struct GameModeService {
    client: ApiClient,
}

impl GameModeService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn path(id: &EntityId) -> String {
        format!("/game-mode/{}", id.path_segment())
    }
}

#[async_trait(?Send)]
impl GameModeApi for GameModeService {
    async fn get_all(&self) -> ApiResult<Vec<GameMode>> {
        self.client.get("/game-mode").await
    }

    async fn get_by_id(&self, id: &EntityId) -> ApiResult<GameMode> {
        self.client.get(&Self::path(id)).await
    }

    async fn create(&self, dto: &GameModeDto) -> ApiResult<GameMode> {
        self.client.post_json("/game-mode", dto).await
    }

    async fn update(&self, id: &EntityId, dto: &GameModeDto) -> ApiResult<GameMode> {
        self.client.patch_json(&Self::path(id), dto).await
    }

    async fn remove(&self, id: &EntityId) -> ApiResult<()> {
        self.client.delete_unit(&Self::path(id)).await
    }
}
