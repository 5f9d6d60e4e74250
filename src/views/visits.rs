//! Visit list screens for the clinic and patient portals.

use crate::api::client::PortalApi;
use crate::models::Visit;

use super::pager::Pager;
use super::DEFAULT_PER_PAGE;

/// Visit log shown to clinic staff — every visit recorded at the clinic.
pub struct ClinicVisitsView<'a, A: PortalApi> {
    api: &'a A,
    per_page: u32,
    pager: Pager<Visit>,
}

impl<'a, A: PortalApi> ClinicVisitsView<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            per_page: DEFAULT_PER_PAGE,
            pager: Pager::new(),
        }
    }

    pub fn with_per_page(api: &'a A, per_page: u32) -> Self {
        Self {
            api,
            per_page,
            pager: Pager::new(),
        }
    }

    pub fn pager(&self) -> &Pager<Visit> {
        &self.pager
    }

    /// Mount: fetch the first page.
    pub async fn load(&mut self) {
        self.load_page(1).await;
    }

    pub async fn load_page(&mut self, page: u32) {
        let generation = self.pager.begin_fetch();
        let result = self.api.get_clinic_visits(page, self.per_page).await;
        self.pager.apply(generation, result);
    }

    /// No-op while the control is disabled at the upper boundary.
    pub async fn next_page(&mut self) {
        if self.pager.next_enabled() {
            self.load_page(self.pager.current_page() + 1).await;
        }
    }

    /// No-op while the control is disabled at the lower boundary.
    pub async fn prev_page(&mut self) {
        if self.pager.prev_enabled() {
            self.load_page(self.pager.current_page() - 1).await;
        }
    }
}

/// The signed-in patient's own visit history.
pub struct PatientVisitsView<'a, A: PortalApi> {
    api: &'a A,
    per_page: u32,
    pager: Pager<Visit>,
}

impl<'a, A: PortalApi> PatientVisitsView<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            per_page: DEFAULT_PER_PAGE,
            pager: Pager::new(),
        }
    }

    pub fn pager(&self) -> &Pager<Visit> {
        &self.pager
    }

    pub async fn load(&mut self) {
        self.load_page(1).await;
    }

    pub async fn load_page(&mut self, page: u32) {
        let generation = self.pager.begin_fetch();
        let result = self.api.get_patient_visits(page, self.per_page).await;
        self.pager.apply(generation, result);
    }

    pub async fn next_page(&mut self) {
        if self.pager.next_enabled() {
            self.load_page(self.pager.current_page() + 1).await;
        }
    }

    pub async fn prev_page(&mut self) {
        if self.pager.prev_enabled() {
            self.load_page(self.pager.current_page() - 1).await;
        }
    }
}
