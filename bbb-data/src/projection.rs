//! Per-sample projections feeding the three dashboard views.
//!
//! Each projection is a pure function of the dataset and a sample id.
//! Bar and bubble projections fail with [`DashboardError::SampleNotFound`]
//! when the sample is absent; the metadata projection never fails and
//! falls back to a sentinel line instead.

use serde::Serialize;
use serde_json::Value;

use crate::dataset::Dataset;
use crate::error::{DashboardError, Result};
use crate::sample_id::{format_number, SampleId};

/// Number of measurements shown in the bar chart.
pub const TOP_OTU_COUNT: usize = 10;

/// Text shown in the metadata panel when a sample has no metadata.
pub const NO_METADATA: &str = "No metadata found.";

/// Bar orientation, serialized the way Plotly expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
}

/// The leading measurements of a sample, reversed for a horizontal bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    /// `"OTU {id}"` category labels
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub hover_text: Vec<String>,
    pub orientation: Orientation,
}

impl BarSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Every measurement of a sample, in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleSeries {
    pub x: Vec<i64>,
    pub y: Vec<f64>,
    pub marker_size: Vec<f64>,
    pub marker_color: Vec<i64>,
    pub hover_text: Vec<String>,
}

impl BubbleSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Lines displayed in the metadata panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "lines", rename_all = "snake_case")]
pub enum MetadataPanel {
    /// `"{field}: {value}"` lines in field order
    Found(Vec<String>),
    Missing,
}

impl MetadataPanel {
    /// The visible lines, with the sentinel for a missing record.
    pub fn lines(&self) -> Vec<String> {
        match self {
            MetadataPanel::Found(lines) => lines.clone(),
            MetadataPanel::Missing => vec![NO_METADATA.to_string()],
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, MetadataPanel::Missing)
    }
}

/// Top ten measurements of a sample, reversed.
pub fn project_bar(dataset: &Dataset, id: &SampleId) -> Result<BarSeries> {
    project_bar_top(dataset, id, TOP_OTU_COUNT)
}

/// First `n` measurements of a sample in reverse order, so the first
/// measurement ends up last (drawn at the top of a horizontal chart).
/// Samples with fewer than `n` measurements use all of them.
pub fn project_bar_top(dataset: &Dataset, id: &SampleId, n: usize) -> Result<BarSeries> {
    let sample = dataset
        .sample(id)
        .ok_or_else(|| DashboardError::SampleNotFound(id.clone()))?;

    let window: Vec<_> = sample.measurements().take(n).collect();

    let mut series = BarSeries {
        labels: Vec::with_capacity(window.len()),
        values: Vec::with_capacity(window.len()),
        hover_text: Vec::with_capacity(window.len()),
        orientation: Orientation::Horizontal,
    };
    for m in window.into_iter().rev() {
        series.labels.push(format!("OTU {}", m.taxon_id));
        series.values.push(m.value);
        series.hover_text.push(m.label.to_string());
    }
    Ok(series)
}

/// All measurements of a sample, unsliced and in document order.
pub fn project_bubble(dataset: &Dataset, id: &SampleId) -> Result<BubbleSeries> {
    let sample = dataset
        .sample(id)
        .ok_or_else(|| DashboardError::SampleNotFound(id.clone()))?;

    let n = sample.len();
    let mut series = BubbleSeries {
        x: Vec::with_capacity(n),
        y: Vec::with_capacity(n),
        marker_size: Vec::with_capacity(n),
        marker_color: Vec::with_capacity(n),
        hover_text: Vec::with_capacity(n),
    };
    for m in sample.measurements() {
        series.x.push(m.taxon_id);
        series.y.push(m.value);
        series.marker_size.push(m.value);
        series.marker_color.push(m.taxon_id);
        series.hover_text.push(m.label.to_string());
    }
    Ok(series)
}

/// Metadata lines for a sample, or [`MetadataPanel::Missing`].
pub fn project_metadata(dataset: &Dataset, id: &SampleId) -> MetadataPanel {
    match dataset.metadata_for(id) {
        Some(record) => MetadataPanel::Found(
            record
                .fields
                .iter()
                .map(|(key, value)| format!("{}: {}", key, display_scalar(value)))
                .collect(),
        ),
        None => MetadataPanel::Missing,
    }
}

/// Render a JSON value the way string interpolation on the page would.
pub fn display_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(format_number).unwrap_or_default()
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_scalar(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Sample "S1" with 15 measurements: ids 1..=15, values 15..=1.
    fn fifteen_sample_dataset() -> Dataset {
        let ids: Vec<i64> = (1..=15).collect();
        let values: Vec<f64> = (1..=15).rev().map(f64::from).collect();
        let labels: Vec<String> = (1..=15).map(|i| format!("L{i}")).collect();
        let doc = json!({
            "names": ["S1", "S2", "S3"],
            "samples": [
                {"id": "S1", "otu_ids": ids, "sample_values": values, "otu_labels": labels},
                {"id": "S3", "otu_ids": [7, 8, 9], "sample_values": [3, 2, 1], "otu_labels": ["a", "b", "c"]}
            ],
            "metadata": [{"id": "S1", "age": 30}]
        });
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn bar_takes_first_ten_and_reverses() {
        let ds = fifteen_sample_dataset();
        let bar = project_bar(&ds, &SampleId::from("S1")).unwrap();

        assert_eq!(bar.len(), 10);
        assert_eq!(bar.orientation, Orientation::Horizontal);
        assert_eq!(bar.labels.first().unwrap(), "OTU 10");
        assert_eq!(bar.labels.last().unwrap(), "OTU 1");
        assert_eq!(bar.values, vec![6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
        assert_eq!(bar.hover_text[0], "L10");
        assert_eq!(bar.hover_text[9], "L1");
    }

    #[test]
    fn bar_with_fewer_than_ten_uses_all() {
        let ds = fifteen_sample_dataset();
        let bar = project_bar(&ds, &SampleId::from("S3")).unwrap();
        assert_eq!(bar.labels, vec!["OTU 9", "OTU 8", "OTU 7"]);
        assert_eq!(bar.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(bar.hover_text, vec!["c", "b", "a"]);
    }

    #[test]
    fn bar_top_n_is_configurable() {
        let ds = fifteen_sample_dataset();
        let bar = project_bar_top(&ds, &SampleId::from("S1"), 3).unwrap();
        assert_eq!(bar.labels, vec!["OTU 3", "OTU 2", "OTU 1"]);

        let empty = project_bar_top(&ds, &SampleId::from("S1"), 0).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn bubble_keeps_every_measurement_in_order() {
        let ds = fifteen_sample_dataset();
        let bubble = project_bubble(&ds, &SampleId::from("S1")).unwrap();

        assert_eq!(bubble.len(), 15);
        assert_eq!(bubble.x, (1..=15).collect::<Vec<i64>>());
        assert_eq!(bubble.marker_color, bubble.x);
        assert_eq!(bubble.y[0], 15.0);
        assert_eq!(bubble.y[14], 1.0);
        assert_eq!(bubble.marker_size, bubble.y);
        assert_eq!(bubble.hover_text[0], "L1");
    }

    #[test]
    fn missing_sample_is_not_found_for_both_charts() {
        let ds = fifteen_sample_dataset();
        let id = SampleId::from("S2");
        assert!(matches!(
            project_bar(&ds, &id),
            Err(DashboardError::SampleNotFound(ref missing)) if missing == &id
        ));
        assert!(matches!(
            project_bubble(&ds, &id),
            Err(DashboardError::SampleNotFound(_))
        ));
    }

    #[test]
    fn metadata_lines_in_field_order() {
        let ds = fifteen_sample_dataset();
        let panel = project_metadata(&ds, &SampleId::from("S1"));
        assert_eq!(panel.lines(), vec!["id: S1", "age: 30"]);
        assert!(!panel.is_missing());
    }

    #[test]
    fn missing_metadata_yields_sentinel() {
        let ds = fifteen_sample_dataset();
        let panel = project_metadata(&ds, &SampleId::from("S2"));
        assert!(panel.is_missing());
        assert_eq!(panel.lines(), vec!["No metadata found."]);
    }

    #[test]
    fn scalar_display() {
        assert_eq!(display_scalar(&json!("Beaufort/NC")), "Beaufort/NC");
        assert_eq!(display_scalar(&json!(24)), "24");
        assert_eq!(display_scalar(&json!(2.0)), "2");
        assert_eq!(display_scalar(&json!(0.5)), "0.5");
        assert_eq!(display_scalar(&json!(null)), "null");
        assert_eq!(display_scalar(&json!(false)), "false");
        assert_eq!(display_scalar(&json!([1, null, "x"])), "1,,x");
        assert_eq!(display_scalar(&json!({"a": 1})), "[object Object]");
    }
}
