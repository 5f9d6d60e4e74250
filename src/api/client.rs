//! HTTP client for the portal backend.
//!
//! `PortalApi` is the seam screens and the auth service depend on; the
//! reqwest-backed `PortalClient` is its production implementation. Tests
//! substitute mocks at the trait boundary instead of standing up a server.

use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::enums::LoginType;
use crate::models::{Clinic, Diagnosis, Patient, Visit};

use super::error::ApiError;
use super::types::{
    AuthResponse, ChangePasswordRequest, ClinicLoginRequest, LoginRequest, Paginated,
    ProfileResponse, RegisterClinicRequest, RegisterPatientRequest, UpdateClinicRequest,
};

/// Operations the backend exposes to this portal.
///
/// One method per endpoint; every list endpoint returns the shared
/// `Paginated` envelope. Errors always carry a displayable message.
#[allow(async_fn_in_trait)]
pub trait PortalApi {
    /// Set (or clear) the bearer token attached to subsequent requests.
    fn set_token(&self, token: Option<String>);

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError>;
    async fn clinic_login(
        &self,
        email: &str,
        password: &str,
        login_type: LoginType,
    ) -> Result<AuthResponse, ApiError>;
    async fn register_patient(
        &self,
        request: &RegisterPatientRequest,
    ) -> Result<AuthResponse, ApiError>;
    async fn register_clinic(
        &self,
        request: &RegisterClinicRequest,
    ) -> Result<AuthResponse, ApiError>;

    async fn get_profile(&self) -> Result<ProfileResponse, ApiError>;
    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError>;

    async fn get_clinic_profile(&self) -> Result<Clinic, ApiError>;
    async fn update_clinic_profile(
        &self,
        request: &UpdateClinicRequest,
    ) -> Result<Clinic, ApiError>;

    async fn get_clinic_visits(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Visit>, ApiError>;
    async fn get_patient_visits(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Visit>, ApiError>;
    async fn get_patient_diagnoses(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Diagnosis>, ApiError>;
    async fn get_medical_patients(
        &self,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> Result<Paginated<Patient>, ApiError>;
}

/// reqwest-backed client for the portal backend.
pub struct PortalClient {
    base_url: String,
    client: reqwest::Client,
    token: RwLock<Option<String>>,
}

impl PortalClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            token: RwLock::new(None),
        }
    }

    /// Client pointed at the configured backend (`CARELINK_API_URL` or default).
    pub fn from_config() -> Self {
        Self::new(&crate::config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn bearer(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run a prepared request, attach the bearer token if present, and map
    /// non-success statuses into `ApiError::Status` with the server message.
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = match self.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.send(self.client.get(self.url(path)).query(query)).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    fn page_query(page: u32, per_page: u32) -> Vec<(&'static str, String)> {
        vec![("page", page.to_string()), ("per_page", per_page.to_string())]
    }
}

/// Acknowledgement body for endpoints that return no data.
#[derive(serde::Deserialize)]
struct Ack {
    #[allow(dead_code)]
    #[serde(default)]
    message: Option<String>,
}

impl PortalApi for PortalClient {
    fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/auth/login", &body).await
    }

    async fn clinic_login(
        &self,
        email: &str,
        password: &str,
        login_type: LoginType,
    ) -> Result<AuthResponse, ApiError> {
        let body = ClinicLoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            login_type,
        };
        self.post_json("/auth/clinic-login", &body).await
    }

    async fn register_patient(
        &self,
        request: &RegisterPatientRequest,
    ) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/register/patient", request).await
    }

    async fn register_clinic(
        &self,
        request: &RegisterClinicRequest,
    ) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/register/clinic", request).await
    }

    async fn get_profile(&self) -> Result<ProfileResponse, ApiError> {
        self.get_json("/profile", &[]).await
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        let _: Ack = self.post_json("/profile/change-password", request).await?;
        Ok(())
    }

    async fn get_clinic_profile(&self) -> Result<Clinic, ApiError> {
        self.get_json("/clinic/profile", &[]).await
    }

    async fn update_clinic_profile(
        &self,
        request: &UpdateClinicRequest,
    ) -> Result<Clinic, ApiError> {
        self.put_json("/clinic/profile", request).await
    }

    async fn get_clinic_visits(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Visit>, ApiError> {
        self.get_json("/clinic/visits", &Self::page_query(page, per_page))
            .await
    }

    async fn get_patient_visits(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Visit>, ApiError> {
        self.get_json("/patient/visits", &Self::page_query(page, per_page))
            .await
    }

    async fn get_patient_diagnoses(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Diagnosis>, ApiError> {
        self.get_json("/patient/diagnoses", &Self::page_query(page, per_page))
            .await
    }

    async fn get_medical_patients(
        &self,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> Result<Paginated<Patient>, ApiError> {
        let mut query = Self::page_query(page, per_page);
        if let Some(term) = search {
            query.push(("search", term.to_string()));
        }
        self.get_json("/medical/patients", &query).await
    }
}
