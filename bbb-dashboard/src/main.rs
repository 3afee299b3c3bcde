//! Belly Button Biodiversity Dashboard
//!
//! Fetches the published samples document once, fills the sample dropdown,
//! and shows three linked views for the selected sample: a horizontal bar
//! chart of its top 10 OTUs, a bubble chart of every OTU, and a
//! demographic info panel.
//!
//! Data flow:
//! 1. On mount, the samples JSON is fetched with the browser fetch API and
//!    parsed into a `Dataset` (ids normalized to canonical strings).
//! 2. The `Dashboard` controller populates the selector and renders the
//!    first sample through `PlotlyView`.
//! 3. Each dropdown change re-runs the three projections against the held
//!    dataset; nothing is re-fetched.
//! 4. If the fetch fails the page shows an error box and stays empty.

use bbb_chart_ui::components::{
    ChartContainer, ChartHeader, DemographicPanel, ErrorDisplay, LoadingSpinner, SampleSelector,
};
use bbb_chart_ui::state::AppState;
use bbb_chart_ui::view::{PlotlyView, BAR_CHART_ID, BUBBLE_CHART_ID};
use bbb_chart_ui::{js_bridge, loader};
use bbb_data::DATA_URL;
use dioxus::prelude::*;

/// Plotly bundle; the chart helpers wait for it before initializing.
const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("biodiversity-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Fetch the dataset once on mount and hand it to the controller
    use_effect(move || {
        js_bridge::init_charts();

        spawn(async move {
            log::info!("app: loading dataset from {}", DATA_URL);
            let fetched = loader::fetch_dataset(DATA_URL).await;
            let mut view = PlotlyView::new(state);
            let result = state.dashboard.write().init(fetched, &mut view);
            match result {
                Ok(()) => log::info!(
                    "app: dashboard ready with {} samples",
                    state.sample_ids.read().len()
                ),
                Err(e) => {
                    log::error!("app: dataset load failed, dashboard left empty: {}", e);
                    state.error_msg.set(Some(e.to_string()));
                }
            }
            state.loading.set(false);
        });
    });

    rsx! {
        document::Script { src: PLOTLY_JS_URL }

        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Belly Button Biodiversity Dashboard".to_string(),
                description: "Use the interactive charts below to explore the dataset".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-start;",

                    div {
                        style: "flex: 0 0 240px;",
                        SampleSelector {}
                        DemographicPanel {}
                    }

                    div {
                        style: "flex: 1 1 480px;",
                        ChartContainer {
                            id: BAR_CHART_ID.to_string(),
                            min_height: 450,
                        }
                    }
                }

                ChartContainer {
                    id: BUBBLE_CHART_ID.to_string(),
                    min_height: 500,
                }
            }
        }
    }
}
