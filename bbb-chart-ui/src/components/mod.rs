//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod demographic_panel;
mod error_display;
mod loading_spinner;
mod sample_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use demographic_panel::{DemographicPanel, METADATA_PANEL_ID};
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use sample_selector::{SampleSelector, SELECTOR_ID};
