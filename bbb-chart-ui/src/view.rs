//! Plotly/Dioxus implementation of [`DashboardView`].
//!
//! Charts are drawn through the JS bridge; the selector and metadata panel
//! are plain signals rendered by RSX components, so each update replaces
//! the previous content.

use bbb_data::figure::{bar_figure, bubble_figure, Figure};
use bbb_data::projection::{BarSeries, BubbleSeries, MetadataPanel, TOP_OTU_COUNT};
use bbb_data::{DashboardView, SampleId};
use dioxus::prelude::*;

use crate::js_bridge;
use crate::state::AppState;

/// DOM id of the bar chart container.
pub const BAR_CHART_ID: &str = "bar";
/// DOM id of the bubble chart container.
pub const BUBBLE_CHART_ID: &str = "bubble";

pub struct PlotlyView {
    state: AppState,
}

impl PlotlyView {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

fn render_figure(container_id: &str, figure: &Figure) {
    let (data_json, layout_json) = match (figure.data_json(), figure.layout_json()) {
        (Ok(data), Ok(layout)) => (data, layout),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("Failed to serialize figure for {}: {}", container_id, e);
            return;
        }
    };
    js_bridge::render_plot(container_id, &data_json, &layout_json);
}

impl DashboardView for PlotlyView {
    fn populate_samples(&mut self, names: &[SampleId], selected: Option<&SampleId>) {
        self.state.sample_ids.set(names.to_vec());
        self.state.selected_sample.set(selected.cloned());
    }

    fn render_bar(&mut self, series: &BarSeries) {
        render_figure(BAR_CHART_ID, &bar_figure(series, TOP_OTU_COUNT));
    }

    fn render_bubble(&mut self, series: &BubbleSeries) {
        render_figure(BUBBLE_CHART_ID, &bubble_figure(series));
    }

    fn render_metadata(&mut self, panel: &MetadataPanel) {
        self.state.metadata_lines.set(panel.lines());
    }
}
