//! The signed-in account record, discriminated by user type.
//!
//! The backend returns the same `user` object shape only per role: patient
//! logins carry a `Patient` record, every staff-side login (clinic staff,
//! doctor, nurse, admin) carries the owning `Clinic` record. Consumers match
//! exhaustively instead of casting.

use serde::{Deserialize, Serialize};

use super::enums::UserType;
use super::{Clinic, ModelError, Patient};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortalUser {
    Patient(Patient),
    Clinic(Clinic),
}

impl PortalUser {
    /// Decode the `user` payload of an auth/profile response according to
    /// the authoritative `user_type` the server sent alongside it.
    pub fn from_payload(
        user_type: UserType,
        payload: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        match user_type {
            UserType::Patient => serde_json::from_value(payload).map(Self::Patient),
            UserType::ClinicStaff | UserType::Doctor | UserType::Nurse | UserType::Admin => {
                serde_json::from_value(payload).map(Self::Clinic)
            }
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Patient(p) => &p.full_name,
            Self::Clinic(c) => &c.name,
        }
    }

    pub fn as_patient(&self) -> Result<&Patient, ModelError> {
        match self {
            Self::Patient(p) => Ok(p),
            Self::Clinic(_) => Err(ModelError::InvalidEnum {
                field: "PortalUser".into(),
                value: "clinic record where a patient was required".into(),
            }),
        }
    }

    pub fn as_clinic(&self) -> Result<&Clinic, ModelError> {
        match self {
            Self::Clinic(c) => Ok(c),
            Self::Patient(_) => Err(ModelError::InvalidEnum {
                field: "PortalUser".into(),
                value: "patient record where a clinic was required".into(),
            }),
        }
    }
}
