//! Page Controllers
//!
//! The panel's screens without their rendering: list state, modal state,
//! form fields, validation, save sequences and toast messages. The browser
//! panel and the CLI both drive these.
//!
//! Every screen follows the same cycle. Mount loads the list; submit
//! validates, saves, toasts and reloads the whole list; delete asks first.

pub mod auth;
pub mod characters;
pub mod dashboard;
pub mod feedback;
pub mod forms;
pub mod franchises;
pub mod game_modes;
pub mod images;
pub mod list;
pub mod modal;
pub mod multi_value;

#[cfg(test)]
mod fakes;

pub use auth::{restore_session, sign_out, AuthContext, Redirect};
pub use characters::{save_character, CharactersPage};
pub use dashboard::{ChartKind, ChartSpec, DashboardPage, DashboardView, Dataset, KpiCard};
pub use feedback::{failure_message, AutoConfirm, Confirm, Notifier, Toast, ToastKind, ToastLog};
pub use forms::{CharacterForm, FranchiseForm, GameModeForm};
pub use franchises::{save_franchise, FranchisesPage};
pub use game_modes::{save_game_mode, GameModesPage};
pub use images::{ImagePolicy, PLACEHOLDER_IMAGE};
pub use list::{ListState, LoadPhase};
pub use modal::ModalState;
pub use multi_value::MultiValueField;
