//! Dashboard controller.
//!
//! Holds the fetched dataset and the current selection, and pushes the three
//! projections into a [`DashboardView`] whenever the selection changes.
//!
//! ```text
//! Uninitialized --init(Ok)--> Ready(names[0]) --select(id)--> Ready(id) --> ...
//!       |
//!       +--init(Err)--> Uninitialized (no retry)
//! ```

use std::rc::Rc;

use crate::dataset::Dataset;
use crate::error::{DashboardError, Result};
use crate::projection::{
    project_bar, project_bubble, project_metadata, BarSeries, BubbleSeries, MetadataPanel,
};
use crate::sample_id::SampleId;

/// Rendering side of the dashboard.
///
/// Each render call replaces whatever the view showed before.
pub trait DashboardView {
    /// Fill the sample selector, preserving order.
    fn populate_samples(&mut self, names: &[SampleId], selected: Option<&SampleId>);
    fn render_bar(&mut self, series: &BarSeries);
    fn render_bubble(&mut self, series: &BubbleSeries);
    fn render_metadata(&mut self, panel: &MetadataPanel);
}

#[derive(Debug, Clone, Default)]
pub enum DashboardState {
    #[default]
    Uninitialized,
    Ready {
        dataset: Rc<Dataset>,
        /// `None` only when the dataset lists no names
        current: Option<SampleId>,
    },
}

/// Outcome of one refresh; each view succeeds or fails on its own.
#[derive(Debug)]
pub struct RefreshReport {
    pub bar: Result<()>,
    pub bubble: Result<()>,
    pub metadata_found: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    state: DashboardState,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, DashboardState::Ready { .. })
    }

    pub fn dataset(&self) -> Option<&Rc<Dataset>> {
        match &self.state {
            DashboardState::Ready { dataset, .. } => Some(dataset),
            DashboardState::Uninitialized => None,
        }
    }

    pub fn current_sample(&self) -> Option<&SampleId> {
        match &self.state {
            DashboardState::Ready { current, .. } => current.as_ref(),
            DashboardState::Uninitialized => None,
        }
    }

    /// Take the outcome of the initial fetch.
    ///
    /// On success the selector is populated and the first sample rendered.
    /// On failure nothing is rendered, the state is left untouched and the
    /// error is handed back for display.
    pub fn init<V: DashboardView>(
        &mut self,
        fetched: Result<Dataset>,
        view: &mut V,
    ) -> Result<()> {
        let dataset = match fetched {
            Ok(dataset) => Rc::new(dataset),
            Err(e) => {
                log::error!("dashboard: dataset fetch failed: {}", e);
                return Err(e);
            }
        };

        let current = dataset.first_name().cloned();
        view.populate_samples(dataset.names(), current.as_ref());

        match &current {
            Some(id) => {
                log::info!("dashboard: ready, default sample {}", id);
                Self::refresh(&dataset, id, view);
            }
            None => log::warn!("dashboard: dataset lists no samples"),
        }

        self.state = DashboardState::Ready { dataset, current };
        Ok(())
    }

    /// Handle a selector change.
    ///
    /// Ignored (returns `None`) until `init` has succeeded.
    pub fn select<V: DashboardView>(
        &mut self,
        id: SampleId,
        view: &mut V,
    ) -> Option<RefreshReport> {
        let DashboardState::Ready { dataset, current } = &mut self.state else {
            log::warn!("dashboard: ignoring selection {} before data is loaded", id);
            return None;
        };
        log::info!("dashboard: selected sample {}", id);
        let report = Self::refresh(dataset, &id, view);
        *current = Some(id);
        Some(report)
    }

    /// Re-run all three projections for `id` and render each result.
    ///
    /// A missing sample skips the bar and bubble views (leaving their
    /// previous content) but still renders the metadata fallback.
    pub fn refresh<V: DashboardView>(dataset: &Dataset, id: &SampleId, view: &mut V) -> RefreshReport {
        let bar = project_bar(dataset, id).map(|series| view.render_bar(&series));
        if let Err(e) = &bar {
            log::error!("dashboard: bar chart not updated: {}", e);
        }

        let bubble = project_bubble(dataset, id).map(|series| view.render_bubble(&series));
        if let Err(e) = &bubble {
            log::error!("dashboard: bubble chart not updated: {}", e);
        }

        let panel = project_metadata(dataset, id);
        let metadata_found = !panel.is_missing();
        view.render_metadata(&panel);

        RefreshReport {
            bar,
            bubble,
            metadata_found,
        }
    }
}

impl RefreshReport {
    /// True when every view was updated from real data.
    pub fn is_complete(&self) -> bool {
        self.bar.is_ok() && self.bubble.is_ok() && self.metadata_found
    }

    pub fn not_found(&self) -> Option<&SampleId> {
        match (&self.bar, &self.bubble) {
            (Err(DashboardError::SampleNotFound(id)), _) => Some(id),
            (_, Err(DashboardError::SampleNotFound(id))) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Records what is visible in each view, replacing on every render.
    #[derive(Default)]
    struct RecordingView {
        options: Vec<SampleId>,
        selected: Option<SampleId>,
        bar: Option<BarSeries>,
        bubble: Option<BubbleSeries>,
        metadata: Vec<String>,
        renders: usize,
    }

    impl DashboardView for RecordingView {
        fn populate_samples(&mut self, names: &[SampleId], selected: Option<&SampleId>) {
            self.options = names.to_vec();
            self.selected = selected.cloned();
        }

        fn render_bar(&mut self, series: &BarSeries) {
            self.bar = Some(series.clone());
            self.renders += 1;
        }

        fn render_bubble(&mut self, series: &BubbleSeries) {
            self.bubble = Some(series.clone());
            self.renders += 1;
        }

        fn render_metadata(&mut self, panel: &MetadataPanel) {
            self.metadata = panel.lines();
            self.renders += 1;
        }
    }

    fn dataset() -> Dataset {
        let ids: Vec<i64> = (1..=15).collect();
        let values: Vec<f64> = (1..=15).rev().map(f64::from).collect();
        let labels: Vec<String> = (1..=15).map(|i| format!("L{i}")).collect();
        serde_json::from_value(json!({
            "names": ["S1", "S2", "S3"],
            "samples": [
                {"id": "S1", "otu_ids": ids, "sample_values": values, "otu_labels": labels},
                {"id": "S3", "otu_ids": [7], "sample_values": [1], "otu_labels": ["g"]}
            ],
            "metadata": [{"id": "S1", "age": 30}]
        }))
        .unwrap()
    }

    #[test]
    fn init_selects_first_sample_and_renders_all_views() {
        let mut dashboard = Dashboard::new();
        let mut view = RecordingView::default();

        dashboard.init(Ok(dataset()), &mut view).unwrap();

        assert!(dashboard.is_ready());
        assert_eq!(dashboard.current_sample(), Some(&SampleId::from("S1")));
        assert_eq!(
            view.options,
            vec![SampleId::from("S1"), SampleId::from("S2"), SampleId::from("S3")]
        );
        assert_eq!(view.selected, Some(SampleId::from("S1")));

        let bar = view.bar.as_ref().unwrap();
        assert_eq!(bar.len(), 10);
        assert_eq!(bar.labels[0], "OTU 10");
        assert_eq!(bar.labels[9], "OTU 1");

        assert_eq!(view.bubble.as_ref().unwrap().len(), 15);
        assert_eq!(view.metadata, vec!["id: S1", "age: 30"]);
    }

    #[test]
    fn selecting_absent_sample_keeps_charts_and_shows_sentinel() {
        let mut dashboard = Dashboard::new();
        let mut view = RecordingView::default();
        dashboard.init(Ok(dataset()), &mut view).unwrap();
        let bar_before = view.bar.clone();
        let bubble_before = view.bubble.clone();

        let report = dashboard.select(SampleId::from("S2"), &mut view).unwrap();

        assert!(report.bar.is_err());
        assert!(report.bubble.is_err());
        assert!(!report.metadata_found);
        assert!(!report.is_complete());
        assert_eq!(report.not_found(), Some(&SampleId::from("S2")));
        assert_eq!(view.bar, bar_before);
        assert_eq!(view.bubble, bubble_before);
        assert_eq!(view.metadata, vec!["No metadata found."]);
        assert_eq!(dashboard.current_sample(), Some(&SampleId::from("S2")));
    }

    #[test]
    fn sample_without_metadata_is_incomplete_but_found() {
        let mut dashboard = Dashboard::new();
        let mut view = RecordingView::default();
        dashboard.init(Ok(dataset()), &mut view).unwrap();

        let report = dashboard.select(SampleId::from("S3"), &mut view).unwrap();

        assert!(report.bar.is_ok());
        assert!(report.bubble.is_ok());
        assert_eq!(report.not_found(), None);
        assert!(!report.is_complete());
        assert_eq!(view.bar.as_ref().unwrap().labels, vec!["OTU 7"]);
        assert_eq!(view.metadata, vec!["No metadata found."]);
    }

    #[test]
    fn rerendering_same_sample_is_idempotent() {
        let mut dashboard = Dashboard::new();
        let mut view = RecordingView::default();
        dashboard.init(Ok(dataset()), &mut view).unwrap();
        let first = view.metadata.clone();

        let report = dashboard.select(SampleId::from("S1"), &mut view).unwrap();

        assert!(report.is_complete());
        assert_eq!(view.metadata, first);
        assert_eq!(view.metadata.len(), 2);
    }

    #[test]
    fn failed_fetch_stays_uninitialized() {
        let mut dashboard = Dashboard::new();
        let mut view = RecordingView::default();

        let err = dashboard
            .init(Err(DashboardError::Fetch("HTTP 500".into())), &mut view)
            .unwrap_err();

        assert!(matches!(err, DashboardError::Fetch(_)));
        assert!(!dashboard.is_ready());
        assert!(view.options.is_empty());
        assert_eq!(view.renders, 0);
    }

    #[test]
    fn selection_before_init_is_ignored() {
        let mut dashboard = Dashboard::new();
        let mut view = RecordingView::default();

        assert!(dashboard.select(SampleId::from("S1"), &mut view).is_none());
        assert_eq!(view.renders, 0);
        assert!(dashboard.current_sample().is_none());
    }

    #[test]
    fn empty_names_is_ready_without_rendering() {
        let ds = Dataset::from_json_str(r#"{"names": [], "samples": [], "metadata": []}"#).unwrap();
        let mut dashboard = Dashboard::new();
        let mut view = RecordingView::default();

        dashboard.init(Ok(ds), &mut view).unwrap();

        assert!(dashboard.is_ready());
        assert!(dashboard.current_sample().is_none());
        assert_eq!(view.renders, 0);
    }
}
