//! WindSightAI - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading wind-turbine blade imagery and
//! reviewing AI analysis results from the WindSightAI backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (session-aware navigation)                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /           LandingPage                                │
//! │  ├── /login      LoginPage                                  │
//! │  ├── /register   RegisterPage                               │
//! │  ├── /dashboard  RequireSession ▸ DashboardPage             │
//! │  └── /contact    ContactPage                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer · ToastHost                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Upload, Analysis, SessionUser, errors)
//! - [`session`] - Persisted session and the authentication route guard
//! - [`components`] - UI components (Header, Toasts, image rendering)
//! - [`pages`] - Routed pages
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod session;
pub mod components;
pub mod pages;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Uploads
    Upload, Analysis,
    // Session
    SessionUser,
    // Errors
    AppError, AppResult,
};

// Session
pub use session::{RequireSession, Session};

// Components
pub use components::*;

// Pages
pub use pages::*;

// Services
pub use services::*;

// =============================================================================
// Application Root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    session::provide_session();
    components::provide_toaster();

    view! {
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route
                        path="/dashboard"
                        view=|| {
                            view! {
                                <RequireSession>
                                    <DashboardPage/>
                                </RequireSession>
                            }
                        }
                    />
                    <Route path="/contact" view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
            <ToastHost/>
        </Router>
    }
}
