//! Diagnosis history screen for the patient portal.

use crate::api::client::PortalApi;
use crate::models::Diagnosis;

use super::pager::Pager;
use super::DEFAULT_PER_PAGE;

pub struct PatientDiagnosesView<'a, A: PortalApi> {
    api: &'a A,
    per_page: u32,
    pager: Pager<Diagnosis>,
}

impl<'a, A: PortalApi> PatientDiagnosesView<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            per_page: DEFAULT_PER_PAGE,
            pager: Pager::new(),
        }
    }

    pub fn pager(&self) -> &Pager<Diagnosis> {
        &self.pager
    }

    pub async fn load(&mut self) {
        self.load_page(1).await;
    }

    pub async fn load_page(&mut self, page: u32) {
        let generation = self.pager.begin_fetch();
        let result = self.api.get_patient_diagnoses(page, self.per_page).await;
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
