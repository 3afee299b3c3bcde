//! Plotly figure descriptions built from projections.
//!
//! The structs serialize straight into the `data` and `layout` arguments of
//! `Plotly.newPlot`, so the WASM app and the CLI share one definition of
//! what each chart looks like.

use serde::Serialize;

use crate::projection::{BarSeries, BubbleSeries, Orientation};

/// A single Plotly trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar {
        x: Vec<f64>,
        y: Vec<String>,
        text: Vec<String>,
        orientation: Orientation,
    },
    Scatter {
        x: Vec<i64>,
        y: Vec<f64>,
        text: Vec<String>,
        mode: &'static str,
        marker: Marker,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub size: Vec<f64>,
    pub color: Vec<i64>,
    pub colorscale: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<&'static str>,
    pub margin: Margin,
}

/// Data traces plus layout, ready for `Plotly.newPlot`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn data_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.data)
    }

    pub fn layout_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.layout)
    }
}

/// Horizontal "Top {top} OTUs Found" bar chart.
///
/// `top` is the window the series was cut to, not its length: a sample with
/// fewer measurements still gets the window in its title.
pub fn bar_figure(series: &BarSeries, top: usize) -> Figure {
    Figure {
        data: vec![Trace::Bar {
            x: series.values.clone(),
            y: series.labels.clone(),
            text: series.hover_text.clone(),
            orientation: series.orientation,
        }],
        layout: Layout {
            title: Title::new(format!("Top {} OTUs Found", top)),
            xaxis: Axis {
                title: Title::new("Sample Values"),
            },
            yaxis: Axis {
                title: Title::new("OTU ID"),
            },
            hovermode: None,
            margin: Margin {
                l: 100,
                r: 50,
                t: 50,
                b: 50,
            },
        },
    }
}

/// "Bacteria Cultures Per Sample" bubble chart.
pub fn bubble_figure(series: &BubbleSeries) -> Figure {
    Figure {
        data: vec![Trace::Scatter {
            x: series.x.clone(),
            y: series.y.clone(),
            text: series.hover_text.clone(),
            mode: "markers",
            marker: Marker {
                size: series.marker_size.clone(),
                color: series.marker_color.clone(),
                colorscale: "Earth",
            },
        }],
        layout: Layout {
            title: Title::new("Bacteria Cultures Per Sample"),
            xaxis: Axis {
                title: Title::new("OTU ID"),
            },
            yaxis: Axis {
                title: Title::new("Sample Values"),
            },
            hovermode: Some("closest"),
            margin: Margin {
                l: 50,
                r: 50,
                t: 50,
                b: 50,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::TOP_OTU_COUNT;
    use serde_json::json;

    fn bar() -> BarSeries {
        BarSeries {
            labels: vec!["OTU 2".into(), "OTU 1".into()],
            values: vec![5.0, 9.0],
            hover_text: vec!["b".into(), "a".into()],
            orientation: Orientation::Horizontal,
        }
    }

    #[test]
    fn bar_trace_json() {
        let fig = bar_figure(&bar(), TOP_OTU_COUNT);
        let data: serde_json::Value = serde_json::from_str(&fig.data_json().unwrap()).unwrap();
        assert_eq!(
            data,
            json!([{
                "type": "bar",
                "x": [5.0, 9.0],
                "y": ["OTU 2", "OTU 1"],
                "text": ["b", "a"],
                "orientation": "h"
            }])
        );
    }

    #[test]
    fn bar_layout_json() {
        let fig = bar_figure(&bar(), TOP_OTU_COUNT);
        let layout: serde_json::Value = serde_json::from_str(&fig.layout_json().unwrap()).unwrap();
        assert_eq!(layout["title"]["text"], "Top 10 OTUs Found");
        assert_eq!(layout["yaxis"]["title"]["text"], "OTU ID");
        assert_eq!(layout["margin"]["l"], 100);
        assert!(layout.get("hovermode").is_none());
    }

    #[test]
    fn bar_title_follows_window_size() {
        let fig = bar_figure(&bar(), 3);
        assert_eq!(fig.layout.title.text, "Top 3 OTUs Found");
    }

    #[test]
    fn bubble_trace_json() {
        let series = BubbleSeries {
            x: vec![1, 2],
            y: vec![9.0, 5.0],
            marker_size: vec![9.0, 5.0],
            marker_color: vec![1, 2],
            hover_text: vec!["a".into(), "b".into()],
        };
        let fig = bubble_figure(&series);
        let data = serde_json::to_value(&fig.data).unwrap();
        assert_eq!(data[0]["type"], "scatter");
        assert_eq!(data[0]["mode"], "markers");
        assert_eq!(data[0]["marker"]["colorscale"], "Earth");
        assert_eq!(data[0]["marker"]["color"], json!([1, 2]));
        assert_eq!(fig.layout.hovermode, Some("closest"));
        assert_eq!(fig.layout.title.text, "Bacteria Cultures Per Sample");
    }
}
