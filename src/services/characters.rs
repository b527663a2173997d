//! Character service over the REST client

use async_trait::async_trait;

use super::CharacterApi;
use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{
    Character, CreateCharacterDto, EntityId, FileUpload, ImageUpdate, UpdateCharacterDto,
};

#[derive(Clone)]
pub struct CharacterService {
    client: ApiClient,
}

impl CharacterService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn path(id: &EntityId) -> String {
        format!("/characters/{}", id.path_segment())
    }
}

#[async_trait(?Send)]
impl CharacterApi for CharacterService {
    async fn get_all(&self) -> ApiResult<Vec<Character>> {
        self.client.get("/characters").await
    }

    async fn get_by_id(&self, id: &EntityId) -> ApiResult<Character> {
        self.client.get(&Self::path(id)).await
    }

    async fn create(
        &self,
        dto: &CreateCharacterDto,
        file: Option<&FileUpload>,
    ) -> ApiResult<Character> {
        self.client
            .post_multipart("/characters", dto.to_multipart(file))
            .await
    }

    async fn update(&self, id: &EntityId, dto: &UpdateCharacterDto) -> ApiResult<Character> {
        self.client.patch_json(&Self::path(id), dto).await
    }

    async fn update_image(&self, id: &EntityId, image: &ImageUpdate) -> ApiResult<Character> {
        self.client
            .patch_multipart(
                &format!("{}/image", Self::path(id)),
                image.to_multipart("imageUrl1"),
            )
            .await
    }

    async fn delete_image(&self, id: &EntityId) -> ApiResult<Character> {
        self.client
            .delete(&format!("{}/image", Self::path(id)))
            .await
    }

    async fn remove(&self, id: &EntityId) -> ApiResult<Character> {
        self.client.delete(&Self::path(id)).await
    }
}
