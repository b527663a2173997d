//! Backend Entities
//!
//! Plain records mirrored from the backend JSON (camelCase on the wire) and
//! the DTOs sent back to it. The panel only keeps transient copies.

mod character;
mod franchise;
mod game_mode;
mod id;
mod kpi;
mod upload;
mod user;

pub use character::{AliveStatus, Character, CreateCharacterDto, Gender, UpdateCharacterDto};
pub use franchise::{Franchise, NewFranchise, UpdateFranchiseDto};
pub use game_mode::{GameMode, GameModeDto, ModeTag};
pub use id::EntityId;
pub use kpi::{Kpi, TopCharacter};
pub use upload::{guess_image_mime, FileUpload, FormField, ImageUpdate, MultipartBody};
pub use user::{LoginRequest, LoginResponse, Role, User, UserStatus};
