//! Pages
//!
//! Top-level page components for each route.

pub mod characters;
pub mod dashboard;
pub mod franchises;
pub mod game_modes;
pub mod login;

pub use characters::Characters;
pub use dashboard::Dashboard;
pub use franchises::Franchises;
pub use game_modes::GameModes;
pub use login::Login;

use dreamworks_panel::{ApiResult, FileUpload};

use crate::api::client::read_file;

/// Read a picked file at submit time
pub(crate) async fn read_picked(file: Option<web_sys::File>) -> ApiResult<Option<FileUpload>> {
    match file {
        Some(file) => read_file(&file).await.map(Some),
        None => Ok(None),
    }
}
