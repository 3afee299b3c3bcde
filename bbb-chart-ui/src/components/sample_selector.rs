//! Dropdown selector for choosing a sample.

use bbb_data::SampleId;
use dioxus::prelude::*;

use crate::state::AppState;
use crate::view::PlotlyView;

/// DOM id of the sample dropdown.
pub const SELECTOR_ID: &str = "selDataset";

/// Sample dropdown selector.
/// Lists the dataset's sample ids in order; a change re-renders all views
/// through the dashboard controller.
#[component]
pub fn SampleSelector() -> Element {
    let mut state = use_context::<AppState>();
    let samples = state.sample_ids.read().clone();
    let selected = (state.selected_sample)();

    let on_change = move |evt: Event<FormData>| {
        let id = SampleId::from(evt.value());
        let mut view = PlotlyView::new(state);
        let Some(report) = state.dashboard.write().select(id.clone(), &mut view) else {
            return;
        };
        if let Some(missing) = report.not_found() {
            log::warn!("selector: no measurements for sample {}, charts kept", missing);
        } else if !report.is_complete() {
            log::warn!("selector: sample {} has no metadata", id);
        }
        state.selected_sample.set(Some(id));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: SELECTOR_ID,
                style: "font-weight: bold; margin-right: 8px;",
                "Test Subject ID No.: "
            }
            select {
                id: SELECTOR_ID,
                onchange: on_change,
                for sample in samples.iter() {
                    option {
                        value: "{sample}",
                        selected: selected.as_ref() == Some(sample),
                        "{sample}"
                    }
                }
            }
        }
    }
}
