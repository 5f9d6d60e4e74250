//! Scripted `PortalApi` double for tests.
//!
//! Each endpoint pops its next scripted response; an unscripted call returns
//! a transport error and still counts, so tests can assert both "was called
//! with" and "was never called".

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::models::enums::LoginType;
use crate::models::{Clinic, Diagnosis, Patient, Visit};

use super::client::PortalApi;
use super::error::ApiError;
use super::types::{
    AuthResponse, ChangePasswordRequest, Paginated, ProfileResponse, RegisterClinicRequest,
    RegisterPatientRequest, UpdateClinicRequest,
};

type Script<T> = Mutex<VecDeque<Result<T, ApiError>>>;

fn pop<T>(script: &Script<T>, endpoint: &str) -> Result<T, ApiError> {
    script
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Transport(format!("unscripted call to {endpoint}"))))
}

fn push<T>(script: &Script<T>, result: Result<T, ApiError>) {
    script.lock().unwrap().push_back(result);
}

#[derive(Default)]
pub struct MockApi {
    pub token: Mutex<Option<String>>,

    login: Script<AuthResponse>,
    clinic_login: Script<AuthResponse>,
    register_patient: Script<AuthResponse>,
    register_clinic: Script<AuthResponse>,
    profile: Script<ProfileResponse>,
    change_password: Script<()>,
    clinic_profile: Script<Clinic>,
    update_clinic: Script<Clinic>,
    clinic_visits: Script<Paginated<Visit>>,
    patient_visits: Script<Paginated<Visit>>,
    patient_diagnoses: Script<Paginated<Diagnosis>>,
    medical_patients: Script<Paginated<Patient>>,

    pub change_password_calls: AtomicUsize,
    pub network_calls: AtomicUsize,
    /// Search term of the most recent medical patients request.
    pub last_search: Mutex<Option<String>>,
    /// Page of the most recent medical patients request.
    pub last_patients_page: Mutex<Option<u32>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_login(&self, result: Result<AuthResponse, ApiError>) {
        push(&self.login, result);
    }

    pub fn script_clinic_login(&self, result: Result<AuthResponse, ApiError>) {
        push(&self.clinic_login, result);
    }

    pub fn script_register_patient(&self, result: Result<AuthResponse, ApiError>) {
        push(&self.register_patient, result);
    }

    pub fn script_register_clinic(&self, result: Result<AuthResponse, ApiError>) {
        push(&self.register_clinic, result);
    }

    pub fn script_profile(&self, result: Result<ProfileResponse, ApiError>) {
        push(&self.profile, result);
    }

    pub fn script_change_password(&self, result: Result<(), ApiError>) {
        push(&self.change_password, result);
    }

    pub fn script_clinic_profile(&self, result: Result<Clinic, ApiError>) {
        push(&self.clinic_profile, result);
    }

    pub fn script_update_clinic(&self, result: Result<Clinic, ApiError>) {
        push(&self.update_clinic, result);
    }

    pub fn script_clinic_visits(&self, result: Result<Paginated<Visit>, ApiError>) {
        push(&self.clinic_visits, result);
    }

    pub fn script_patient_visits(&self, result: Result<Paginated<Visit>, ApiError>) {
        push(&self.patient_visits, result);
    }

    pub fn script_patient_diagnoses(&self, result: Result<Paginated<Diagnosis>, ApiError>) {
        push(&self.patient_diagnoses, result);
    }

    pub fn script_medical_patients(&self, result: Result<Paginated<Patient>, ApiError>) {
        push(&self.medical_patients, result);
    }

    pub fn total_network_calls(&self) -> usize {
        self.network_calls.load(Ordering::SeqCst)
    }

    fn count(&self) {
        self.network_calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl PortalApi for MockApi {
    fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }

    async fn login(&self, _email: &str, _password: &str) -> Result<AuthResponse, ApiError> {
        self.count();
        pop(&self.login, "login")
    }

    async fn clinic_login(
        &self,
        _email: &str,
        _password: &str,
        _login_type: LoginType,
    ) -> Result<AuthResponse, ApiError> {
        self.count();
        pop(&self.clinic_login, "clinic_login")
    }

    async fn register_patient(
        &self,
        _request: &RegisterPatientRequest,
    ) -> Result<AuthResponse, ApiError> {
        self.count();
        pop(&self.register_patient, "register_patient")
    }

    async fn register_clinic(
        &self,
        _request: &RegisterClinicRequest,
    ) -> Result<AuthResponse, ApiError> {
        self.count();
        pop(&self.register_clinic, "register_clinic")
    }

    async fn get_profile(&self) -> Result<ProfileResponse, ApiError> {
        self.count();
        pop(&self.profile, "get_profile")
    }

    async fn change_password(&self, _request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.count();
        self.change_password_calls.fetch_add(1, Ordering::SeqCst);
        pop(&self.change_password, "change_password")
    }

    async fn get_clinic_profile(&self) -> Result<Clinic, ApiError> {
        self.count();
        pop(&self.clinic_profile, "get_clinic_profile")
    }

    async fn update_clinic_profile(
        &self,
        _request: &UpdateClinicRequest,
    ) -> Result<Clinic, ApiError> {
        self.count();
        pop(&self.update_clinic, "update_clinic_profile")
    }

    async fn get_clinic_visits(
        &self,
        _page: u32,
        _per_page: u32,
    ) -> Result<Paginated<Visit>, ApiError> {
        self.count();
        pop(&self.clinic_visits, "get_clinic_visits")
    }

    async fn get_patient_visits(
        &self,
        _page: u32,
        _per_page: u32,
    ) -> Result<Paginated<Visit>, ApiError> {
        self.count();
        pop(&self.patient_visits, "get_patient_visits")
    }

    async fn get_patient_diagnoses(
        &self,
        _page: u32,
        _per_page: u32,
    ) -> Result<Paginated<Diagnosis>, ApiError> {
        self.count();
        pop(&self.patient_diagnoses, "get_patient_diagnoses")
    }

    async fn get_medical_patients(
        &self,
        page: u32,
        _per_page: u32,
        search: Option<&str>,
    ) -> Result<Paginated<Patient>, ApiError> {
        self.count();
        *self.last_search.lock().unwrap() = search.map(|s| s.to_string());
        *self.last_patients_page.lock().unwrap() = Some(page);
        pop(&self.medical_patients, "get_medical_patients")
    }
}
