//! Demographic info panel.

use dioxus::prelude::*;

use crate::state::AppState;

/// DOM id of the metadata panel body.
pub const METADATA_PANEL_ID: &str = "sample-metadata";

/// Shows one `h6` per metadata line for the selected sample.
#[component]
pub fn DemographicPanel() -> Element {
    let state = use_context::<AppState>();
    let lines = state.metadata_lines.read().clone();

    rsx! {
        div {
            style: "border: 1px solid #B3D4FC; border-radius: 4px; min-width: 220px;",
            div {
                style: "padding: 8px 12px; background: #0D6EFD; color: white; font-weight: bold;",
                "Demographic Info"
            }
            div {
                id: METADATA_PANEL_ID,
                style: "padding: 8px 12px;",
                for line in lines.iter() {
                    h6 {
                        style: "margin: 4px 0; font-size: 13px;",
                        "{line}"
                    }
                }
            }
        }
    }
}
