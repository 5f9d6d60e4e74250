//! Patient search for the medical portal.
//!
//! The free-text term is applied server-side; changing it restarts from
//! page 1. Clearing the term reloads page 1 unfiltered.

use crate::api::client::PortalApi;
use crate::models::Patient;

use super::pager::Pager;
use super::DEFAULT_PER_PAGE;

pub struct MedicalPatientSearchView<'a, A: PortalApi> {
    api: &'a A,
    per_page: u32,
    search_term: Option<String>,
    pager: Pager<Patient>,
}

impl<'a, A: PortalApi> MedicalPatientSearchView<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            per_page: DEFAULT_PER_PAGE,
            search_term: None,
            pager: Pager::new(),
        }
    }

    pub fn pager(&self) -> &Pager<Patient> {
        &self.pager
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    pub async fn load(&mut self) {
        self.load_page(1).await;
    }

    pub async fn load_page(&mut self, page: u32) {
        let generation = self.pager.begin_fetch();
        let result = self
            .api
            .get_medical_patients(page, self.per_page, self.search_term.as_deref())
            .await;
        self.pager.apply(generation, result);
    }

    /// Apply a new search term and restart from page 1. Whitespace-only
    /// input counts as clearing the term.
    pub async fn search(&mut self, term: &str) {
        let term = term.trim();
        self.search_term = if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        };
        self.load_page(1).await;
    }

    /// Clear the term and reload page 1 unfiltered.
    pub async fn clear_search(&mut self) {
        self.search_term = None;
        self.load_page(1).await;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::api::types::Paginated;
    use crate::models::Gender;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn patient(name: &str) -> Patient {
        Patient {
            id: Uuid::new_v4(),
            full_name: name.into(),
            gender: Gender::Female,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            address: None,
            phone: None,
            clinic_id: Uuid::new_v4(),
        }
    }

    fn patient_page(page: u32, total_pages: u32, names: &[&str]) -> Paginated<Patient> {
        Paginated {
            data: names.iter().map(|n| patient(n)).collect(),
            page,
            per_page: 10,
            total: total_pages as u64 * 10,
            total_pages,
        }
    }

    #[tokio::test]
    async fn search_restarts_from_page_one_with_term() {
        let api = MockApi::new();
        api.script_medical_patients(Ok(patient_page(1, 3, &["Amina Diallo", "Binta Sow"])));
        api.script_medical_patients(Ok(patient_page(2, 3, &["Cheikh Ba"])));
        api.script_medical_patients(Ok(patient_page(1, 1, &["Amina Diallo"])));

        let mut view = MedicalPatientSearchView::new(&api);
        view.load().await;
        view.next_page().await;
        assert_eq!(view.pager().current_page(), 2);

        view.search("Amina").await;

        assert_eq!(view.search_term(), Some("Amina"));
        assert_eq!(*api.last_search.lock().unwrap(), Some("Amina".to_string()));
        assert_eq!(*api.last_patients_page.lock().unwrap(), Some(1));
        assert_eq!(view.pager().items().len(), 1);
    }

    #[tokio::test]
    async fn clearing_the_term_reloads_page_one_unfiltered() {
        let api = MockApi::new();
        api.script_medical_patients(Ok(patient_page(1, 1, &["Amina Diallo"])));
        api.script_medical_patients(Ok(patient_page(1, 3, &["Amina Diallo", "Binta Sow"])));

        let mut view = MedicalPatientSearchView::new(&api);
        view.search("Amina").await;
        view.clear_search().await;

        assert_eq!(view.search_term(), None);
        assert_eq!(*api.last_search.lock().unwrap(), None);
        assert_eq!(*api.last_patients_page.lock().unwrap(), Some(1));
        assert_eq!(view.pager().items().len(), 2);
    }

    #[tokio::test]
    async fn whitespace_term_counts_as_cleared() {
        let api = MockApi::new();
        api.script_medical_patients(Ok(patient_page(1, 1, &["Amina Diallo"])));

        let mut view = MedicalPatientSearchView::new(&api);
        view.search("   ").await;

        assert_eq!(view.search_term(), None);
        assert_eq!(*api.last_search.lock().unwrap(), None);
    }

    #[tokio::test]
    async fn pagination_keeps_the_active_term() {
        let api = MockApi::new();
        api.script_medical_patients(Ok(patient_page(1, 2, &["Amina Diallo"])));
        api.script_medical_patients(Ok(patient_page(2, 2, &["Aminata Ndiaye"])));

        let mut view = MedicalPatientSearchView::new(&api);
        view.search("Ami").await;
        view.next_page().await;

        assert_eq!(*api.last_search.lock().unwrap(), Some("Ami".to_string()));
        assert_eq!(*api.last_patients_page.lock().unwrap(), Some(2));
    }
}
