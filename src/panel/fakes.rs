//! In-memory backend for controller tests

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    Character, CreateCharacterDto, EntityId, FileUpload, Franchise, GameMode, GameModeDto,
    ImageUpdate, Kpi, LoginRequest, LoginResponse, MultipartBody, NewFranchise, Role,
    UpdateCharacterDto, UpdateFranchiseDto, User, UserStatus,
};
use crate::services::{
    AuthApi, CharacterApi, DashboardApi, FranchiseApi, GameModeApi, UserApi,
};

#[derive(Default)]
pub struct FakeBackend {
    characters: RefCell<Vec<Character>>,
    franchises: RefCell<Vec<Franchise>>,
    modes: RefCell<Vec<GameMode>>,
    calls: RefCell<Vec<&'static str>>,
    failures: RefCell<HashMap<&'static str, String>>,
    last_multipart: RefCell<Option<MultipartBody>>,
    next_id: Cell<u64>,
}

fn character(id: u64, name: &str, franchise: &str) -> Character {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "franchiseId": franchise,
    }))
    .unwrap()
}

fn franchise(id: u64, name: &str) -> Franchise {
    serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
}

fn mode(id: u64, name: &str) -> GameMode {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "description": "",
        "isActive": true,
    }))
    .unwrap()
}

fn admin() -> User {
    User {
        id: EntityId::from(1u64),
        email: "admin@dreamworks.com".into(),
        role: Role::Admin,
        status: UserStatus::Active,
        created_at: None,
        last_access: None,
    }
}

impl FakeBackend {
    /// Two franchises, two characters and two game modes
    pub fn seeded() -> Self {
        let backend = Self::default();
        *backend.franchises.borrow_mut() = vec![franchise(1, "Shrek"), franchise(2, "Madagascar")];
        *backend.characters.borrow_mut() =
            vec![character(10, "Burro", "1"), character(11, "Alex", "2")];
        *backend.modes.borrow_mut() = vec![mode(1, "EMOJI"), mode(2, "IMAGE")];
        backend.next_id.set(100);
        backend
    }

    /// Make every call to `op` fail with a 500 and this body
    pub fn fail(&self, op: &'static str, body: &str) {
        self.failures.borrow_mut().insert(op, body.to_string());
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn last_multipart(&self) -> Option<MultipartBody> {
        self.last_multipart.borrow().clone()
    }

    fn call(&self, op: &'static str) -> ApiResult<()> {
        self.calls.borrow_mut().push(op);
        match self.failures.borrow().get(op) {
            Some(body) => Err(ApiError::from_status(500, body)),
            None => Ok(()),
        }
    }

    fn id(&self) -> EntityId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        EntityId::from(id)
    }

    fn not_found() -> ApiError {
        ApiError::from_status(404, r#"{"message":"Não encontrado"}"#)
    }
}

#[async_trait(?Send)]
impl CharacterApi for FakeBackend {
    async fn get_all(&self) -> ApiResult<Vec<Character>> {
        self.call("characters.get_all")?;
        Ok(self.characters.borrow().clone())
    }

    async fn get_by_id(&self, id: &EntityId) -> ApiResult<Character> {
        self.call("characters.get_by_id")?;
        self.characters
            .borrow()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create(
        &self,
        dto: &CreateCharacterDto,
        file: Option<&FileUpload>,
    ) -> ApiResult<Character> {
        self.call("characters.create")?;
        *self.last_multipart.borrow_mut() = Some(dto.to_multipart(file));

        let franchise = dto
            .franchise_ids
            .as_ref()
            .and_then(|ids| ids.first())
            .cloned()
            .unwrap_or_default();
        let mut created = character(0, &dto.name, &franchise);
        created.id = self.id();
        created.emojis = dto.emojis.clone().unwrap_or_default();
        self.characters.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &EntityId, dto: &UpdateCharacterDto) -> ApiResult<Character> {
        self.call("characters.update")?;
        let mut list = self.characters.borrow_mut();
        let found = list.iter_mut().find(|c| &c.id == id).ok_or_else(Self::not_found)?;
        if let Some(name) = &dto.name {
            found.name = name.clone();
        }
        Ok(found.clone())
    }

    async fn update_image(&self, id: &EntityId, image: &ImageUpdate) -> ApiResult<Character> {
        self.call("characters.update_image")?;
        *self.last_multipart.borrow_mut() = Some(image.to_multipart("imageUrl1"));
        self.characters
            .borrow()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn delete_image(&self, id: &EntityId) -> ApiResult<Character> {
        self.call("characters.delete_image")?;
        let mut list = self.characters.borrow_mut();
        let found = list.iter_mut().find(|c| &c.id == id).ok_or_else(Self::not_found)?;
        found.image_url1 = None;
        Ok(found.clone())
    }

    async fn remove(&self, id: &EntityId) -> ApiResult<Character> {
        self.call("characters.remove")?;
        let mut list = self.characters.borrow_mut();
        let index = list.iter().position(|c| &c.id == id).ok_or_else(Self::not_found)?;
        Ok(list.remove(index))
    }
}

#[async_trait(?Send)]
impl FranchiseApi for FakeBackend {
    async fn get_all(&self) -> ApiResult<Vec<Franchise>> {
        self.call("franchises.get_all")?;
        Ok(self.franchises.borrow().clone())
    }

    async fn get_by_id(&self, id: &EntityId) -> ApiResult<Franchise> {
        self.call("franchises.get_by_id")?;
        self.franchises
            .borrow()
            .iter()
            .find(|f| &f.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create_with_image(&self, new: &NewFranchise) -> ApiResult<Franchise> {
        self.call("franchises.create_with_image")?;
        *self.last_multipart.borrow_mut() = Some(new.to_multipart());
        let mut created = franchise(0, &new.name);
        created.id = self.id();
        created.image_url = new.image_url.clone();
        self.franchises.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &EntityId, dto: &UpdateFranchiseDto) -> ApiResult<Franchise> {
        self.call("franchises.update")?;
        let mut list = self.franchises.borrow_mut();
        let found = list.iter_mut().find(|f| &f.id == id).ok_or_else(Self::not_found)?;
        if let Some(name) = &dto.name {
            found.name = name.clone();
        }
        Ok(found.clone())
    }

    async fn update_image(&self, id: &EntityId, image: &ImageUpdate) -> ApiResult<Franchise> {
        self.call("franchises.update_image")?;
        *self.last_multipart.borrow_mut() = Some(image.to_multipart("imageUrl"));
        let mut list = self.franchises.borrow_mut();
        let found = list.iter_mut().find(|f| &f.id == id).ok_or_else(Self::not_found)?;
        if image.image_url.is_some() {
            found.image_url = image.image_url.clone();
        }
        Ok(found.clone())
    }

    async fn remove(&self, id: &EntityId) -> ApiResult<()> {
        self.call("franchises.remove")?;
        self.franchises.borrow_mut().retain(|f| &f.id != id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl GameModeApi for FakeBackend {
    async fn get_all(&self) -> ApiResult<Vec<GameMode>> {
        self.call("game_modes.get_all")?;
        Ok(self.modes.borrow().clone())
    }

    async fn get_by_id(&self, id: &EntityId) -> ApiResult<GameMode> {
        self.call("game_modes.get_by_id")?;
        self.modes
            .borrow()
            .iter()
            .find(|m| &m.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create(&self, dto: &GameModeDto) -> ApiResult<GameMode> {
        self.call("game_modes.create")?;
        let mut created = mode(0, &dto.name);
        created.id = self.id();
        created.description = dto.description.clone();
        created.is_active = dto.is_active;
        self.modes.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &EntityId, dto: &GameModeDto) -> ApiResult<GameMode> {
        self.call("game_modes.update")?;
        let mut list = self.modes.borrow_mut();
        let found = list.iter_mut().find(|m| &m.id == id).ok_or_else(Self::not_found)?;
        found.name = dto.name.clone();
        found.description = dto.description.clone();
        found.is_active = dto.is_active;
        Ok(found.clone())
    }

    async fn remove(&self, id: &EntityId) -> ApiResult<()> {
        self.call("game_modes.remove")?;
        self.modes.borrow_mut().retain(|m| &m.id != id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl UserApi for FakeBackend {
    async fn get_all(&self) -> ApiResult<Vec<User>> {
        self.call("users.get_all")?;
        Ok(vec![admin()])
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeBackend {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.call("auth.login")?;
        let mut user = admin();
        user.email = request.email.clone();
        Ok(LoginResponse {
            token: "token".into(),
            user,
        })
    }

    async fn profile(&self) -> ApiResult<User> {
        self.call("auth.profile")?;
        Ok(admin())
    }

    async fn logout(&self) -> ApiResult<()> {
        self.call("auth.logout")
    }
}

#[async_trait(?Send)]
impl DashboardApi for FakeBackend {
    async fn kpis(&self) -> ApiResult<Kpi> {
        self.call("dashboard.kpis")?;
        Ok(Kpi {
            total_users: 42,
            ..Kpi::default()
        })
    }
}
