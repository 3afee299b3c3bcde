//! Loading spinner component.

use dioxus::prelude::*;

/// Shown while the dataset fetch is outstanding.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading sample data..."
        }
    }
}
