//! AutoCaption - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a video, choosing caption styles
//! and a language, and downloading the generated subtitles. The workflow
//! rules live in `autocaption`; this crate renders them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /            MainContent                                    │
//! │               ├── Header (account badge)                     │
//! │               ├── Hero                                       │
//! │               ├── Upload / Style / Language / Action         │
//! │               ├── Progress                                   │
//! │               ├── Results or Error                           │
//! │               └── Footer                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /auth/login     LoginPage                                   │
//! │  /auth/register  RegisterPage                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Backend URL and UI timings
//! - [`types`] - Reactive handles around the core controllers
//! - [`components`] - UI components
//! - [`services`] - Caption server client over `fetch`

use autocaption::WorkflowController;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use types::{AuthHandle, Shared, WorkflowHandle};
pub use components::*;
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                    <Route path="/auth/login" view=LoginPage/>
                    <Route path="/auth/register" view=RegisterPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let workflow: WorkflowHandle = Shared::new(WorkflowController::new());

    view! {
        <Header workflow=workflow/>

        <div class="container">
            <Hero/>

            <UploadSection workflow=workflow/>
            <StyleSection workflow=workflow/>
            <LanguageSection workflow=workflow/>
            <ActionSection workflow=workflow/>

            <ProgressSection workflow=workflow/>
            <ResultsSection workflow=workflow/>
            <ErrorSection workflow=workflow/>
        </div>

        <Footer/>
    }
}
