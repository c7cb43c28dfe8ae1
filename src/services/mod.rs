//! Backend communication services.
//!
//! # Services
//!
//! - [`api`] - REST calls to the WindSightAI inspection server

pub mod api;

pub use api::*;
