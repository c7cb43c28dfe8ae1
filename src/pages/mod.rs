//! Routed pages.
//!
//! One canonical implementation per route:
//!
//! - [`LandingPage`] - `/`
//! - [`LoginPage`] - `/login`
//! - [`RegisterPage`] - `/register`
//! - [`DashboardPage`] - `/dashboard` (behind the session guard)
//! - [`ContactPage`] - `/contact`

mod contact;
mod dashboard;
mod landing;
mod login;
mod register;

pub use contact::*;
pub use dashboard::*;
pub use landing::*;
pub use login::*;
pub use register::*;
