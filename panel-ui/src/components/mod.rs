//! UI Components
//!
//! Reusable Leptos components for the panel pages.

pub mod chart;
pub mod data_table;
pub mod image_input;
pub mod kpi_card;
pub mod loading;
pub mod modal;
pub mod multi_value_input;
pub mod sidebar;
pub mod toast;

pub use chart::Chart;
pub use data_table::DataTable;
pub use image_input::ImageInput;
pub use kpi_card::KpiCard;
pub use loading::{CardSkeleton, Loading};
pub use modal::Modal;
pub use multi_value_input::MultiValueInput;
pub use sidebar::Sidebar;
pub use toast::Toast;
