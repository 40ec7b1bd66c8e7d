//! App state - pure data structure with no I/O logic

use crate::messages::RenderState;

/// Main application state - pure data, no I/O
///
/// Single writer of the published breed list; all mutation happens on the
/// App actor task.
pub struct AppState {
    /// Breed names from the last successful fetch, in response order
    pub breeds: Vec<String>,

    /// Number of fetches currently outstanding
    pub in_flight: usize,
    pub next_request_id: u64,

    /// Grid scroll offset, in whole rows
    pub grid_scroll: u16,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            breeds: Vec::new(),
            in_flight: 0,
            next_request_id: 1,
            grid_scroll: 0,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// True while at least one fetch is outstanding
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            breeds: self.breeds.clone(),
            is_loading: self.is_loading(),
            grid_scroll: self.grid_scroll,
        }
    }
}
