//! Franchise service over the REST client

use async_trait::async_trait;

use super::FranchiseApi;
use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{EntityId, Franchise, ImageUpdate, NewFranchise, UpdateFranchiseDto};

#[derive(Clone)]
pub struct FranchiseService {
    client: ApiClient,
}

impl FranchiseService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn path(id: &EntityId) -> String {
        format!("/franchises/{}", id.path_segment())
    }
}

#[async_trait(?Send)]
impl FranchiseApi for FranchiseService {
    async fn get_all(&self) -> ApiResult<Vec<Franchise>> {
        self.client.get("/franchises").await
    }

    async fn get_by_id(&self, id: &EntityId) -> ApiResult<Franchise> {
        self.client.get(&Self::path(id)).await
    }

    async fn create_with_image(&self, franchise: &NewFranchise) -> ApiResult<Franchise> {
        self.client
            .post_multipart("/franchises", franchise.to_multipart())
            .await
    }

    async fn update(&self, id: &EntityId, dto: &UpdateFranchiseDto) -> ApiResult<Franchise> {
        self.client.patch_json(&Self::path(id), dto).await
    }

    async fn update_image(&self, id: &EntityId, image: &ImageUpdate) -> ApiResult<Franchise> {
        self.client
            .patch_multipart(
                &format!("{}/image", Self::path(id)),
                image.to_multipart("imageUrl"),
            )
            .await
    }

    async fn remove(&self, id: &EntityId) -> ApiResult<()> {
        self.client.delete_unit(&Self::path(id)).await
    }
}
