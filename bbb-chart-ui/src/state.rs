//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use bbb_data::{Dashboard, SampleId};
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Controller holding the dataset and current selection
    pub dashboard: Signal<Dashboard>,
    /// Whether the initial fetch is still outstanding
    pub loading: Signal<bool>,
    /// Error message if the dataset could not be loaded
    pub error_msg: Signal<Option<String>>,
    /// Selector options, in dataset order
    pub sample_ids: Signal<Vec<SampleId>>,
    /// Currently selected sample
    pub selected_sample: Signal<Option<SampleId>>,
    /// Visible lines of the metadata panel
    pub metadata_lines: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(Dashboard::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            sample_ids: Signal::new(Vec::new()),
            selected_sample: Signal::new(None),
            metadata_lines: Signal::new(Vec::new()),
        }
    }
}
