//! Route paths shared between the auth service, guards, and the host UI.
//!
//! These strings are contracts with the host router — changing one changes
//! where users land after login and where guards send them back.

use crate::models::enums::UserType;

pub const PATIENT_HOME: &str = "/patient";
pub const CLINIC_HOME: &str = "/clinic";
pub const MEDICAL_HOME: &str = "/portal/medical";
pub const ADMIN_HOME: &str = "/admin";

pub const AUTH_PREFIX: &str = "/auth";
pub const LOGIN_PATH: &str = "/auth/login";

/// The landing page for each role.
pub fn home_path(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Patient => PATIENT_HOME,
        UserType::ClinicStaff => CLINIC_HOME,
        UserType::Doctor | UserType::Nurse => MEDICAL_HOME,
        UserType::Admin => ADMIN_HOME,
    }
}

/// Login URL that brings the visitor back to `original` afterwards.
pub fn login_redirect(original: &str) -> String {
    format!("{LOGIN_PATH}?redirect={original}")
}
