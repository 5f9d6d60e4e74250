//! Record types mirrored from the backend REST API.
//!
//! These are plain data shapes — the server owns every invariant beyond
//! type shape, so nothing here validates cross-record consistency.

pub mod clinic;
pub mod diagnosis;
pub mod enums;
pub mod patient;
pub mod prescription;
pub mod staff;
pub mod user;
pub mod visit;

pub use clinic::Clinic;
pub use diagnosis::Diagnosis;
pub use enums::{Gender, LoginType, StaffRole, UserType};
pub use patient::Patient;
pub use prescription::Prescription;
pub use staff::Staff;
pub use user::PortalUser;
pub use visit::Visit;

/// Errors from model parsing.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },
}
