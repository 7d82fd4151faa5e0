//! Adjuntos - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the attachment upload workflow of the
//! administrative application: stage up to 4 PDF files or 1 ZIP archive,
//! pick the responsible program director and submit everything as one
//! multipart request to the hosting page's form action.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                               │
//! │  ├── AttachSection                                           │
//! │  │   ├── target select (directors)                           │
//! │  │   ├── drop zone + FileList preview                        │
//! │  │   ├── picker / discard / save buttons                     │
//! │  │   └── ConfirmModal (discard | save)                       │
//! │  └── NoticeModal (shared error/success surface)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`basket`] - pure admission policy, gates and response classification
//! - [`types`] - common types (StagedFile, Notice, AppError, etc.)
//! - [`components`] - UI components (AttachSection, FileList, modals)
//! - [`services`] - backend communication (directors, upload)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod basket;
pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    Director, DirectorsState,
    // Basket
    PendingAction, StagedFile,
    // Notifications
    Notice,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Adjuntos - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Shared notification surface for every error and success message
    let (notice, set_notice) = create_signal(None::<Notice>);

    view! {
        <div class="container">
            <Hero/>
            <AttachSection set_notice=set_notice/>
            <NoticeModal notice=notice set_notice=set_notice/>
        </div>
    }
}
