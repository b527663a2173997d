//! # DreamWorks Painel
//!
//! Administration client for the character-guessing game backend: CRUD for
//! franchises, characters and game modes, plus a read-only KPI dashboard.
//!
//! ## Modules
//!
//! - [`models`]: backend entities and request DTOs
//! - [`error`]: the client error type
//! - [`services`]: one trait per REST resource, with reqwest implementations
//! - [`panel`]: page controllers, forms, toasts and the dashboard view model
//! - [`client`] / [`config`]: HTTP transport, cookie session and TOML config
//!   (feature `native`)
//!
//! The browser panel builds this crate with default features off and plugs
//! its own HTTP backend into the [`services`] traits.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dreamworks_panel::client::ApiClient;
//! use dreamworks_panel::panel::{FranchisesPage, ToastLog};
//! use dreamworks_panel::services::FranchiseService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new("http://localhost:3000")?;
//!     let franchises = FranchiseService::new(client);
//!     let toasts = ToastLog::new();
//!
//!     let mut page = FranchisesPage::new(&franchises, &toasts);
//!     page.mount().await;
//!
//!     page.open_create();
//!     page.form.name = "Shrek".into();
//!     page.submit().await;
//!
//!     println!("{} franchises", page.list.items().len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod panel;
pub mod services;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;

pub use error::{ApiError, ApiResult};

pub use models::{
    AliveStatus, Character, CreateCharacterDto, EntityId, FileUpload, Franchise, GameMode,
    GameModeDto, Gender, ImageUpdate, Kpi, LoginRequest, LoginResponse, ModeTag, MultipartBody,
    NewFranchise, Role, TopCharacter, UpdateCharacterDto, UpdateFranchiseDto, User, UserStatus,
};

pub use services::{AuthApi, CharacterApi, DashboardApi, FranchiseApi, GameModeApi, UserApi};

#[cfg(feature = "native")]
pub use services::Backend;

#[cfg(feature = "native")]
pub use client::{ApiClient, SessionStore};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
