//! HTTP API Client
//!
//! One backend value implements every resource trait from the shared core,
//! so pages hand it to the same save and delete flows the CLI uses.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData, RequestCredentials};

use dreamworks_panel::models::{FormField, MultipartBody};
use dreamworks_panel::services::{
    AuthApi, CharacterApi, DashboardApi, FranchiseApi, GameModeApi, UserApi,
};
use dreamworks_panel::{
    ApiError, ApiResult, Character, CreateCharacterDto, EntityId, FileUpload, Franchise,
    GameMode, GameModeDto, ImageUpdate, Kpi, LoginRequest, LoginResponse, NewFranchise,
    UpdateCharacterDto, UpdateFranchiseDto, User,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

const API_URL_KEY: &str = "dreamworks_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten())
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim_end_matches('/').to_string()
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

/// Backend reached through the browser's fetch
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base: String,
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(&get_api_base())
    }
}

impl HttpBackend {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        builder.credentials(RequestCredentials::Include)
    }

    async fn send(request: Request) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(response.status(), &text);
        web_sys::console::warn_1(&format!("{} {}", response.url(), err).into());
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        serde_json::from_str(&text).map_err(ApiError::from)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = Self::with_credentials(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(Self::send(request).await?).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let request = Self::with_credentials(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Self::decode(Self::send(request).await?).await
    }

    async fn patch_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let request = Self::with_credentials(Request::patch(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Self::decode(Self::send(request).await?).await
    }

    async fn multipart<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: MultipartBody,
    ) -> ApiResult<T> {
        let form = to_form_data(body)?;
        let request = Self::with_credentials(builder)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(Self::send(request).await?).await
    }

    async fn delete_raw(&self, path: &str) -> ApiResult<Response> {
        let request = Self::with_credentials(Request::delete(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::send(request).await
    }
}

fn to_blob(file: &FileUpload) -> ApiResult<Blob> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)
}

/// Convert the field list into browser form data
fn to_form_data(body: MultipartBody) -> ApiResult<FormData> {
    let form = FormData::new().map_err(js_error)?;
    for field in body.into_fields() {
        let appended = match field {
            FormField::Text { name, value } => form.append_with_str(&name, &value),
            FormField::File { name, file } => {
                let blob = to_blob(&file)?;
                form.append_with_blob_and_filename(&name, &blob, &file.file_name)
            }
        };
        appended.map_err(js_error)?;
    }
    Ok(form)
}

fn character_path(id: &EntityId) -> String {
    format!("/characters/{}", id.path_segment())
}

fn franchise_path(id: &EntityId) -> String {
    format!("/franchises/{}", id.path_segment())
}

fn game_mode_path(id: &EntityId) -> String {
    format!("/game-mode/{}", id.path_segment())
}

#[async_trait(?Send)]
impl CharacterApi for HttpBackend {
    async fn get_all(&self) -> ApiResult<Vec<Character>> {
        self.get("/characters").await
    }

    async fn get_by_id(&self, id: &EntityId) -> ApiResult<Character> {
        self.get(&character_path(id)).await
    }

    async fn create(&self, dto: &CreateCharacterDto, file: Option<&FileUpload>) -> ApiResult<Character> {
        self.multipart(Request::post(&self.url("/characters")), dto.to_multipart(file))
            .await
    }

    async fn update(&self, id: &EntityId, dto: &UpdateCharacterDto) -> ApiResult<Character> {
        self.patch_json(&character_path(id), dto).await
    }

    async fn update_image(&self, id: &EntityId, image: &ImageUpdate) -> ApiResult<Character> {
        let url = self.url(&format!("{}/image", character_path(id)));
        self.multipart(Request::patch(&url), image.to_multipart("imageUrl1"))
            .await
    }

    async fn delete_image(&self, id: &EntityId) -> ApiResult<Character> {
        let response = self
            .delete_raw(&format!("{}/image", character_path(id)))
            .await?;
        Self::decode(response).await
    }

    async fn remove(&self, id: &EntityId) -> ApiResult<Character> {
        Self::decode(self.delete_raw(&character_path(id)).await?).await
    }
}

#[async_trait(?Send)]
impl FranchiseApi for HttpBackend {
    async fn get_all(&self) -> ApiResult<Vec<Franchise>> {
        self.get("/franchises").await
    }

    async fn get_by_id(&self, id: &EntityId) -> ApiResult<Franchise> {
        self.get(&franchise_path(id)).await
    }

    async fn create_with_image(&self, franchise: &NewFranchise) -> ApiResult<Franchise> {
        self.multipart(Request::post(&self.url("/franchises")), franchise.to_multipart())
            .await
    }

    async fn update(&self, id: &EntityId, dto: &UpdateFranchiseDto) -> ApiResult<Franchise> {
        self.patch_json(&franchise_path(id), dto).await
    }

    async fn update_image(&self, id: &EntityId, image: &ImageUpdate) -> ApiResult<Franchise> {
        let url = self.url(&format!("{}/image", franchise_path(id)));
        self.multipart(Request::patch(&url), image.to_multipart("imageUrl"))
            .await
    }

    async fn remove(&self, id: &EntityId) -> ApiResult<()> {
        self.delete_raw(&franchise_path(id)).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl GameModeApi for HttpBackend {
    async fn get_all(&self) -> ApiResult<Vec<GameMode>> {
        self.get("/game-mode").await
    }

    async fn get_by_id(&self, id: &EntityId) -> ApiResult<GameMode> {
        self.get(&game_mode_path(id)).await
    }

    async fn create(&self, dto: &GameModeDto) -> ApiResult<GameMode> {
        self.post_json("/game-mode", dto).await
    }

    async fn update(&self, id: &EntityId, dto: &GameModeDto) -> ApiResult<GameMode> {
        self.patch_json(&game_mode_path(id), dto).await
    }

    async fn remove(&self, id: &EntityId) -> ApiResult<()> {
        self.delete_raw(&game_mode_path(id)).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl UserApi for HttpBackend {
    async fn get_all(&self) -> ApiResult<Vec<User>> {
        self.get("/users").await
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpBackend {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.post_json("/auth/login", request).await
    }

    async fn profile(&self) -> ApiResult<User> {
        self.get("/auth/profile").await
    }

    async fn logout(&self) -> ApiResult<()> {
        let request = Self::with_credentials(Request::post(&self.url("/auth/logout")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::send(request).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl DashboardApi for HttpBackend {
    async fn kpis(&self) -> ApiResult<Kpi> {
        self.get("/admin/dashboard/kpis").await
    }
}

/// Read a picked file into memory
pub async fn read_file(file: &web_sys::File) -> ApiResult<FileUpload> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(js_error)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let upload = FileUpload::new(file.name(), bytes);
    let mime = file.type_();
    Ok(if mime.is_empty() {
        upload
    } else {
        upload.content_type(mime)
    })
}
