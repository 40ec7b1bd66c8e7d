//! Render state - data structure sent from App layer to UI for rendering

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    /// Breed names published by the last successful fetch
    pub breeds: Vec<String>,

    /// True while at least one fetch is outstanding
    pub is_loading: bool,

    /// Grid scroll offset, in whole rows
    pub grid_scroll: u16,
}
