use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Carelink";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default backend the portal talks to when `CARELINK_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    "carelink=info,reqwest=warn".to_string()
}

/// Backend base URL, overridable via `CARELINK_API_URL`.
pub fn api_base_url() -> String {
    std::env::var("CARELINK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get the application data directory
/// ~/Carelink/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Carelink")
}

/// Where the persisted session (token, user type, login type) lives.
pub fn session_file_path() -> PathBuf {
    app_data_dir().join("session.json")
}
