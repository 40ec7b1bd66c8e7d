//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};

/// Rows jumped by PageUp/PageDown
const PAGE_ROWS: u16 = 5;

impl AppState {
    // ========================
    // Fetch lifecycle
    // ========================

    /// Start one fetch. Every trigger fires a new request; overlapping
    /// fetches are neither de-duplicated nor cancelled.
    pub fn trigger_fetch(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.in_flight += 1;
        tracing::info!(id, "breed fetch triggered");
        NetworkCommand::FetchBreeds { id }
    }

    /// Apply a finished fetch. Responses are applied in arrival order, so
    /// whichever fetch completes last owns the published list.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        let NetworkResponse::Completed { id, result, time_ms } = response;
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(resp) => {
                let names = resp.breed_names();
                tracing::info!(id, count = names.len(), status = %resp.status, time_ms, "breed fetch completed");
                self.breeds = names;
            }
            Err(e) => {
                // Logged only; the published list keeps its previous value.
                tracing::error!(id, kind = ?e.kind(), time_ms, error = %e, "breed fetch failed");
            }
        }
    }

    // ========================
    // Grid scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.grid_scroll = self.grid_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.grid_scroll = self.grid_scroll.saturating_add(1);
    }

    pub fn page_up(&mut self) {
        self.grid_scroll = self.grid_scroll.saturating_sub(PAGE_ROWS);
    }

    pub fn page_down(&mut self) {
        self.grid_scroll = self.grid_scroll.saturating_add(PAGE_ROWS);
    }
}
