//! FraudShield - Frontend Rust/Leptos Application
//!
//! A WebAssembly dashboard for uploading financial documents, watching
//! the fraud scan and reviewing its verdict.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┬──────────────────────────────────────────────────┐
//! │          │  Header (search, status, notifications, profile) │
//! │ Sidebar  ├──────────────────────────────────────────────────┤
//! │          │  Routes                                          │
//! │          │  ├── /                  DashboardPage            │
//! │          │  ├── /upload            UploadPage               │
//! │          │  ├── /analysis-results  ResultsPage              │
//! │          │  └── /search            SearchPage               │
//! └──────────┴──────────────────────────────────────────────────┘
//!                                      ToastContainer (overlay)
//! ```
//!
//! # Modules
//!
//! - [`types`] - Wire records and errors
//! - [`session`], [`coordinator`], [`scan`] - Upload and scan state machines
//! - [`notify`] - Toast queue shared through context
//! - [`components`] - UI components
//! - [`pages`] - Routed pages
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod status;
pub mod session;
pub mod notify;
pub mod coordinator;
pub mod scan;
pub mod filters;
pub mod format;
pub mod export;
pub mod chart;
pub mod services;
pub mod components;
pub mod pages;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{
    // Dashboard
    ChartDataPoint, DashboardStats, RecentFile,
    // Scan
    Anomaly, ScanResult, UploadResponse,
    // Errors
    AppError, AppResult,
};

pub use components::*;
pub use pages::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Sets up logging and mounts the application. Called from `main`.
pub fn run() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🛡️ {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    notify::provide_notifier();
    components::provide_mobile_menu();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <div class="app-shell">
                <Sidebar/>
                <div class="app-main">
                    <Header/>
                    <main class="app-content">
                        <Routes>
                            <Route path="/" view=DashboardPage/>
                            <Route path="/upload" view=UploadPage/>
                            <Route path=RESULTS_PATH view=ResultsPage/>
                            <Route path="/search" view=SearchPage/>
                            <Route path="/*any" view=NotFound/>
                        </Routes>
                    </main>
                </div>
            </div>
            <ToastContainer/>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"Page not found"</h1>
            <p class="muted">"The page you are looking for does not exist."</p>
            <a href="/" class="btn btn-primary">"Back to Dashboard"</a>
        </div>
    }
}
