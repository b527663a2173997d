//! DreamWorks Painel
//!
//! Admin panel for the character-guessing game, built with Leptos (WASM).
//!
//! # Features
//!
//! - KPI dashboard with canvas charts
//! - Characters, franchises and game modes CRUD with modal forms
//! - Cookie session against the game backend
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Save and delete flows, forms and messages come from the shared
//! `dreamworks-panel` core; this crate supplies the fetch backend and views.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
