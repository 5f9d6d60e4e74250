//! Per-screen view state.
//!
//! Each screen owns a small controller the host UI reads after every
//! operation: list screens share `Pager`, profile screens share the
//! edit-toggle pattern, and the password form validates locally before it
//! ever touches the network. Controllers borrow the API client — the auth
//! service stays the only owner of the token.

pub mod diagnoses;
pub mod pager;
pub mod password;
pub mod patients;
pub mod profile;
pub mod visits;

pub use diagnoses::PatientDiagnosesView;
pub use pager::{PageMeta, Pager};
pub use password::PasswordChangeForm;
pub use patients::MedicalPatientSearchView;
pub use profile::{ClinicSettingsView, ProfileView};
pub use visits::{ClinicVisitsView, PatientVisitsView};

/// Default rows per page for every list screen.
pub const DEFAULT_PER_PAGE: u32 = 10;
