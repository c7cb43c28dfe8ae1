//! Application configuration.
//!
//! Centralized configuration for the WindSightAI frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The WindSightAI inspection server (auth, upload, analysis).
pub const BACKEND_URL: &str = "http://localhost:5000";

/// Application name shown in the page title.
pub const APP_NAME: &str = "WindSightAI";

/// localStorage key for the signed-in user's id.
pub const STORAGE_USER_ID_KEY: &str = "userId";

/// localStorage key for the signed-in user profile (JSON).
pub const STORAGE_USER_KEY: &str = "user";

/// How long success/warning toasts stay visible (ms).
pub const TOAST_SHORT_MS: u32 = 3_000;

/// How long error toasts stay visible (ms).
pub const TOAST_LONG_MS: u32 = 5_000;

/// Support contact address shown on the contact page.
pub const SUPPORT_EMAIL: &str = "windsightai@gmail.com";
