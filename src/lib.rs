//! Carelink — client core of a role-based healthcare-record portal.
//!
//! Patients, clinic staff, medical staff, and administrators each get a
//! distinct authenticated view over shared medical data. This crate owns
//! everything below the rendering layer: the typed API client, durable
//! session storage, the auth state machine with its redirect policy, the
//! per-portal route guards, and per-screen view state. The host UI reads
//! state from here and forwards user actions back.

pub mod api; // Typed reqwest client over the backend REST API
pub mod auth; // Session state machine + redirect policy
pub mod config;
pub mod guard; // Per-portal route guards
pub mod models;
pub mod routes; // Route path contracts shared with the host router
pub mod session_store; // Durable {token, user_type, login_type}
pub mod views; // Per-screen controllers (lists, forms, search)

use tracing_subscriber::EnvFilter;

/// Initialize tracing for hosts that have no subscriber of their own.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Carelink starting v{}", config::APP_VERSION);
}
