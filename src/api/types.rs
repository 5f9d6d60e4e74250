//! Shared wire types for the portal API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::enums::{Gender, LoginType, UserType};

// ═══════════════════════════════════════════════════════════
// Pagination envelope
// ═══════════════════════════════════════════════════════════

/// Server-side pagination envelope shared by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    /// An empty first page, used before anything has loaded.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            page: 1,
            per_page: 0,
            total: 0,
            total_pages: 0,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Auth requests/responses
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Unified staff/medical login. `login_type` tells the server which portal
/// entrance the user came through; the response's `user_type` stays
/// authoritative regardless.
#[derive(Debug, Serialize)]
pub struct ClinicLoginRequest {
    pub email: String,
    pub password: String,
    pub login_type: LoginType,
}

#[derive(Debug, Serialize)]
pub struct RegisterPatientRequest {
    pub full_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub clinic_id: Uuid,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterClinicRequest {
    pub name: String,
    pub address: String,
    pub contact_number: Option<String>,
    pub district: Option<String>,
    pub email: String,
    pub password: String,
}

/// Successful login/registration/profile payload.
///
/// `user` stays a raw JSON value here; its concrete shape depends on
/// `user_type` and is decoded by `PortalUser::from_payload`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user_type: UserType,
    pub login_type: Option<LoginType>,
    pub user: serde_json::Value,
}

/// Profile re-fetch payload. Same shape as `AuthResponse` minus the token —
/// the caller already holds one.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub user_type: UserType,
    pub login_type: Option<LoginType>,
    pub user: serde_json::Value,
}

// ═══════════════════════════════════════════════════════════
// Profile/settings requests
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Full clinic settings form — the server replaces the record wholesale
/// and returns the canonical result.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateClinicRequest {
    pub name: String,
    pub address: String,
    pub contact_number: Option<String>,
    pub district: Option<String>,
}
