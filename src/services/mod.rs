//! Resource Services
//!
//! One trait per backend resource, one operation per REST endpoint. Page
//! controllers are written against these traits; the native build provides
//! reqwest implementations and the browser panel provides its own.
//!
//! Every call is a single attempt. Failures are returned unchanged.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{
    Character, CreateCharacterDto, EntityId, FileUpload, Franchise, GameMode, GameModeDto,
    ImageUpdate, Kpi, LoginRequest, LoginResponse, NewFranchise, UpdateCharacterDto,
    UpdateFranchiseDto, User,
};

#[cfg(feature = "native")]
mod auth;
#[cfg(feature = "native")]
mod characters;
#[cfg(feature = "native")]
mod dashboard;
#[cfg(feature = "native")]
mod franchises;
#[cfg(feature = "native")]
mod game_modes;
#[cfg(feature = "native")]
mod users;

#[cfg(feature = "native")]
pub use auth::AuthService;
#[cfg(feature = "native")]
pub use characters::CharacterService;
#[cfg(feature = "native")]
pub use dashboard::DashboardService;
#[cfg(feature = "native")]
pub use franchises::FranchiseService;
#[cfg(feature = "native")]
pub use game_modes::GameModeService;
#[cfg(feature = "native")]
pub use users::UserService;

/// Every resource service over one shared client
#[cfg(feature = "native")]
#[derive(Clone)]
pub struct Backend {
    pub characters: CharacterService,
    pub franchises: FranchiseService,
    pub game_modes: GameModeService,
    pub users: UserService,
    pub auth: AuthService,
    pub dashboard: DashboardService,
}

#[cfg(feature = "native")]
impl Backend {
    pub fn new(client: crate::client::ApiClient) -> Self {
        Self {
            characters: CharacterService::new(client.clone()),
            franchises: FranchiseService::new(client.clone()),
            game_modes: GameModeService::new(client.clone()),
            users: UserService::new(client.clone()),
            auth: AuthService::new(client.clone()),
            dashboard: DashboardService::new(client),
        }
    }
}

/// `/characters`
#[async_trait(?Send)]
pub trait CharacterApi {
    async fn get_all(&self) -> ApiResult<Vec<Character>>;

    async fn get_by_id(&self, id: &EntityId) -> ApiResult<Character>;

    /// Multipart create with an optional image under `file`
    async fn create(
        &self,
        dto: &CreateCharacterDto,
        file: Option<&FileUpload>,
    ) -> ApiResult<Character>;

    /// JSON partial update
    async fn update(&self, id: &EntityId, dto: &UpdateCharacterDto) -> ApiResult<Character>;

    /// Multipart image replacement (`file` and/or `imageUrl1`)
    async fn update_image(&self, id: &EntityId, image: &ImageUpdate) -> ApiResult<Character>;

    async fn delete_image(&self, id: &EntityId) -> ApiResult<Character>;

    /// Returns the deleted character
    async fn remove(&self, id: &EntityId) -> ApiResult<Character>;
}

/// `/franchises`
#[async_trait(?Send)]
pub trait FranchiseApi {
    async fn get_all(&self) -> ApiResult<Vec<Franchise>>;

    async fn get_by_id(&self, id: &EntityId) -> ApiResult<Franchise>;

    /// Multipart create (`name`, optional `file` and `imageUrl`)
    async fn create_with_image(&self, franchise: &NewFranchise) -> ApiResult<Franchise>;

    /// JSON partial update
    async fn update(&self, id: &EntityId, dto: &UpdateFranchiseDto) -> ApiResult<Franchise>;

    /// Multipart cover replacement (`file` and/or `imageUrl`)
    async fn update_image(&self, id: &EntityId, image: &ImageUpdate) -> ApiResult<Franchise>;

    async fn remove(&self, id: &EntityId) -> ApiResult<()>;
}

/// `/game-mode`
#[async_trait(?Send)]
pub trait GameModeApi {
    async fn get_all(&self) -> ApiResult<Vec<GameMode>>;

    async fn get_by_id(&self, id: &EntityId) -> ApiResult<GameMode>;

    async fn create(&self, dto: &GameModeDto) -> ApiResult<GameMode>;

    async fn update(&self, id: &EntityId, dto: &GameModeDto) -> ApiResult<GameMode>;

    async fn remove(&self, id: &EntityId) -> ApiResult<()>;
}

/// `/users`
#[async_trait(?Send)]
pub trait UserApi {
    async fn get_all(&self) -> ApiResult<Vec<User>>;
}

/// `/auth`
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;

    /// Current session's user
    async fn profile(&self) -> ApiResult<User>;

    async fn logout(&self) -> ApiResult<()>;
}

/// `/admin/dashboard`
#[async_trait(?Send)]
pub trait DashboardApi {
    async fn kpis(&self) -> ApiResult<Kpi>;
}
