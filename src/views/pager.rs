//! Shared pagination state for list screens.
//!
//! Every fetch is tagged with a generation number; a response whose
//! generation is no longer the latest is discarded, so a slow response for
//! an abandoned page can never overwrite newer rows. Fetch failures keep
//! whatever was already rendered — only the very first load shows an empty
//! list under an error banner. The banner clears when the next fetch starts.

use crate::api::error::ApiError;
use crate::api::types::Paginated;

/// Pagination metadata mirrored from the last successful envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageMeta {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

#[derive(Debug)]
pub struct Pager<T> {
    items: Vec<T>,
    meta: PageMeta,
    loading: bool,
    loaded_once: bool,
    error: Option<ApiError>,
    /// Generation of the most recently issued fetch.
    generation: u64,
}

impl<T> Default for Pager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pager<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            meta: PageMeta::default(),
            loading: false,
            loaded_once: false,
            error: None,
            generation: 0,
        }
    }

    // ── Read access for the host ────────────────────────────

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn meta(&self) -> PageMeta {
        self.meta
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether any page has ever loaded successfully.
    pub fn has_loaded(&self) -> bool {
        self.loaded_once
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// The page currently displayed (1 before anything has loaded).
    pub fn current_page(&self) -> u32 {
        if self.loaded_once {
            self.meta.page
        } else {
            1
        }
    }

    pub fn prev_enabled(&self) -> bool {
        self.current_page() > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.loaded_once && self.meta.page < self.meta.total_pages
    }

    // ── Fetch lifecycle ─────────────────────────────────────

    /// Start a fetch: bumps the generation, clears the error banner, and
    /// returns the token the matching `apply` must present.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Apply a fetch result. Stale generations are discarded wholesale —
    /// neither rows nor errors from an abandoned fetch reach the screen.
    pub fn apply(&mut self, generation: u64, result: Result<Paginated<T>, ApiError>) {
        if generation != self.generation {
            tracing::debug!(generation, latest = self.generation, "Discarding stale page response");
            return;
        }
        self.loading = false;
        match result {
            Ok(envelope) => {
                self.items = envelope.data;
                self.meta = PageMeta {
                    page: envelope.page,
                    per_page: envelope.per_page,
                    total: envelope.total,
                    total_pages: envelope.total_pages,
                };
                self.loaded_once = true;
                self.error = None;
            }
            Err(e) => {
                // Previously rendered rows stay put.
                self.error = Some(e);
            }
        }
    }

    /// Drop all loaded state, e.g. when the filter context changes.
    pub fn reset(&mut self) {
        self.items.clear();
        self.meta = PageMeta::default();
        self.loading = false;
        self.loaded_once = false;
        self.error = None;
        self.generation += 1;
    }
}
