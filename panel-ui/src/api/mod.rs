//! Browser HTTP backend
//!
//! gloo-net implementation of the resource services. Requests always carry
//! the session cookies (`credentials: include`).

pub mod client;

pub use client::HttpBackend;
