//! Profile and settings screens.
//!
//! `ProfileView` is the read-only account page. `ClinicSettingsView` is the
//! edit-toggle settings form: view mode shows the last loaded record, edit
//! mode works on a form seeded from it, Save adopts the server's canonical
//! record, Cancel reverts locally.

use crate::api::client::PortalApi;
use crate::api::error::ApiError;
use crate::api::types::UpdateClinicRequest;
use crate::models::enums::UserType;
use crate::models::{Clinic, PortalUser};

// ═══════════════════════════════════════════════════════════
// ProfileView — read-only account page
// ═══════════════════════════════════════════════════════════

pub struct ProfileView<'a, A: PortalApi> {
    api: &'a A,
    user: Option<PortalUser>,
    user_type: Option<UserType>,
    loading: bool,
    error: Option<ApiError>,
}

impl<'a, A: PortalApi> ProfileView<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            user: None,
            user_type: None,
            loading: false,
            error: None,
        }
    }

    pub fn user(&self) -> Option<&PortalUser> {
        self.user.as_ref()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.user_type
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;
        match self.api.get_profile().await {
            Ok(profile) => match PortalUser::from_payload(profile.user_type, profile.user) {
                Ok(user) => {
                    self.user = Some(user);
                    self.user_type = Some(profile.user_type);
                }
                Err(e) => self.error = Some(ApiError::Decode(e.to_string())),
            },
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }
}

// ═══════════════════════════════════════════════════════════
// ClinicSettingsView — edit-toggle form
// ═══════════════════════════════════════════════════════════

/// Editable clinic fields as the form holds them. Optional record fields
/// render as empty strings and convert back on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClinicForm {
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub district: String,
}

impl ClinicForm {
    fn from_record(record: &Clinic) -> Self {
        Self {
            name: record.name.clone(),
            address: record.address.clone(),
            contact_number: record.contact_number.clone().unwrap_or_default(),
            district: record.district.clone().unwrap_or_default(),
        }
    }

    fn to_request(&self) -> UpdateClinicRequest {
        let optional = |s: &str| {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        UpdateClinicRequest {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            contact_number: optional(&self.contact_number),
            district: optional(&self.district),
        }
    }
}

pub struct ClinicSettingsView<'a, A: PortalApi> {
    api: &'a A,
    record: Option<Clinic>,
    form: ClinicForm,
    editing: bool,
    loading: bool,
    error: Option<ApiError>,
}

impl<'a, A: PortalApi> ClinicSettingsView<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            record: None,
            form: ClinicForm::default(),
            editing: false,
            loading: false,
            error: None,
        }
    }

    // ── Read access ─────────────────────────────────────────

    /// The last successfully loaded (canonical) record.
    pub fn record(&self) -> Option<&Clinic> {
        self.record.as_ref()
    }

    pub fn form(&self) -> &ClinicForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ClinicForm {
        &mut self.form
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    // ── Lifecycle ───────────────────────────────────────────

    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;
        match self.api.get_clinic_profile().await {
            Ok(record) => {
                self.form = ClinicForm::from_record(&record);
                self.record = Some(record);
            }
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }

    /// Enter edit mode with the form seeded from the loaded record.
    /// No-op until a record has loaded.
    pub fn begin_edit(&mut self) {
        if let Some(record) = &self.record {
            self.form = ClinicForm::from_record(record);
            self.editing = true;
            self.error = None;
        }
    }

    /// Discard edits and return to view mode. No network call.
    pub fn cancel_edit(&mut self) {
        if let Some(record) = &self.record {
            self.form = ClinicForm::from_record(record);
        }
        self.editing = false;
        self.error = None;
    }

    /// Submit the full form. Success adopts the server's canonical record
    /// and exits edit mode; failure keeps the form editable.
    pub async fn save(&mut self) {
        self.loading = true;
        self.error = None;
        match self.api.update_clinic_profile(&self.form.to_request()).await {
            Ok(canonical) => {
                self.form = ClinicForm::from_record(&canonical);
                self.record = Some(canonical);
                self.editing = false;
            }
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use uuid::Uuid;

    fn clinic(name: &str, district: Option<&str>) -> Clinic {
        Clinic {
            id: Uuid::new_v4(),
            name: name.into(),
            address: "1 Avenue de la Sante".into(),
            contact_number: None,
            district: district.map(String::from),
        }
    }

    #[tokio::test]
    async fn load_seeds_form_from_record() {
        let api = MockApi::new();
        api.script_clinic_profile(Ok(clinic("Nord District Clinic", Some("Nord"))));

        let mut view = ClinicSettingsView::new(&api);
        view.load().await;

        assert_eq!(view.record().unwrap().name, "Nord District Clinic");
        assert_eq!(view.form().name, "Nord District Clinic");
        assert_eq!(view.form().district, "Nord");
        assert_eq!(view.form().contact_number, "");
        assert!(!view.is_editing());
    }

    #[tokio::test]
    async fn save_adopts_canonical_record_and_exits_edit_mode() {
        let api = MockApi::new();
        api.script_clinic_profile(Ok(clinic("Nord District Clinic", None)));
        // Server normalizes the name on update
        api.script_update_clinic(Ok(clinic("Nord District Clinic (Main)", Some("Nord"))));

        let mut view = ClinicSettingsView::new(&api);
        view.load().await;
        view.begin_edit();
        view.form_mut().name = "nord district clinic (main)".into();
        view.form_mut().district = "Nord".into();
        view.save().await;

        assert!(!view.is_editing());
        assert_eq!(view.record().unwrap().name, "Nord District Clinic (Main)");
        assert_eq!(view.form().name, "Nord District Clinic (Main)");
    }

    #[tokio::test]
    async fn cancel_reverts_without_network() {
        let api = MockApi::new();
        api.script_clinic_profile(Ok(clinic("Nord District Clinic", Some("Nord"))));

        let mut view = ClinicSettingsView::new(&api);
        view.load().await;
        let calls_after_load = api.total_network_calls();

        view.begin_edit();
        view.form_mut().name = "Typo City".into();
        view.cancel_edit();

        assert!(!view.is_editing());
        assert_eq!(view.form().name, "Nord District Clinic");
        assert_eq!(api.total_network_calls(), calls_after_load);
    }

    #[tokio::test]
    async fn failed_save_stays_in_edit_mode_with_record_intact() {
        let api = MockApi::new();
        api.script_clinic_profile(Ok(clinic("Nord District Clinic", None)));
        api.script_update_clinic(Err(ApiError::from_status(
            422,
            r#"{"message": "Name already taken"}"#,
        )));

        let mut view = ClinicSettingsView::new(&api);
        view.load().await;
        view.begin_edit();
        view.form_mut().name = "Taken Name".into();
        view.save().await;

        assert!(view.is_editing());
        assert_eq!(view.error().unwrap().to_string(), "Name already taken");
        assert_eq!(view.record().unwrap().name, "Nord District Clinic");
        assert_eq!(view.form().name, "Taken Name");
    }

    #[tokio::test]
    async fn begin_edit_before_load_is_a_no_op() {
        let api = MockApi::new();
        let mut view = ClinicSettingsView::new(&api);
        view.begin_edit();
        assert!(!view.is_editing());
    }

    #[tokio::test]
    async fn profile_view_loads_and_reports_errors() {
        use crate::api::types::ProfileResponse;
        use serde_json::json;

        let api = MockApi::new();
        api.script_profile(Ok(ProfileResponse {
            user_type: UserType::ClinicStaff,
            login_type: None,
            user: json!({
                "id": "f1d2c3b4-a596-4877-8899-aabbccddeeff",
                "name": "Nord District Clinic",
                "address": "1 Avenue de la Sante",
                "contact_number": null,
                "district": null
            }),
        }));

        let mut view = ProfileView::new(&api);
        view.load().await;
        assert_eq!(view.user().unwrap().display_name(), "Nord District Clinic");
        assert_eq!(view.user_type(), Some(UserType::ClinicStaff));

        api.script_profile(Err(ApiError::Timeout));
        view.load().await;
        assert!(view.error().is_some());
        // Last loaded user stays rendered behind the banner
        assert!(view.user().is_some());
    }
}
