//! Printing samples and per-sample projections.
//!
//! A missing sample is reported the way the dashboard handles it: the bar
//! and bubble sections show the lookup error, the metadata section shows
//! its fallback line, and the command still succeeds.

use std::io::Write;

use bbb_data::figure::{bar_figure, bubble_figure, Figure};
use bbb_data::projection::{project_bar_top, project_bubble, project_metadata};
use bbb_data::{Dataset, SampleId};
use serde::Serialize;

/// One sample id per line, in dataset order.
pub fn write_samples<W: Write>(dataset: &Dataset, out: &mut W) -> anyhow::Result<()> {
    for id in dataset.names() {
        writeln!(out, "{}", id)?;
    }
    Ok(())
}

/// Human-readable dump of the three projections.
pub fn write_text<W: Write>(
    dataset: &Dataset,
    id: &SampleId,
    top: usize,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out, "Sample {}", id)?;

    writeln!(out)?;
    writeln!(out, "Top {} OTUs (bar):", top)?;
    match project_bar_top(dataset, id, top) {
        Ok(bar) => {
            for ((label, value), text) in bar.labels.iter().zip(&bar.values).zip(&bar.hover_text) {
                writeln!(out, "  {:<10} {:>8}  {}", label, value, text)?;
            }
        }
        Err(e) => {
            log::error!("{}", e);
            writeln!(out, "  {}", e)?;
        }
    }

    writeln!(out)?;
    match project_bubble(dataset, id) {
        Ok(bubble) => {
            writeln!(out, "All OTUs (bubble): {}", bubble.len())?;
            for ((x, y), text) in bubble.x.iter().zip(&bubble.y).zip(&bubble.hover_text) {
                writeln!(out, "  {:<10} {:>8}  {}", x, y, text)?;
            }
        }
        Err(e) => {
            log::error!("{}", e);
            writeln!(out, "All OTUs (bubble):")?;
            writeln!(out, "  {}", e)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Demographic Info:")?;
    for line in project_metadata(dataset, id).lines() {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct SampleFigures {
    sample: SampleId,
    bar: Option<Figure>,
    bubble: Option<Figure>,
    metadata: Vec<String>,
}

/// The Plotly figures the dashboard would draw, as pretty JSON.
/// Charts for a missing sample are `null`.
pub fn write_json<W: Write>(
    dataset: &Dataset,
    id: &SampleId,
    top: usize,
    out: &mut W,
) -> anyhow::Result<()> {
    let bar = project_bar_top(dataset, id, top)
        .map_err(|e| log::error!("{}", e))
        .ok()
        .map(|series| bar_figure(&series, top));
    let bubble = project_bubble(dataset, id)
        .map_err(|e| log::error!("{}", e))
        .ok()
        .map(|series| bubble_figure(&series));

    let figures = SampleFigures {
        sample: id.clone(),
        bar,
        bubble,
        metadata: project_metadata(dataset, id).lines(),
    };
    serde_json::to_writer_pretty(&mut *out, &figures)?;
    writeln!(out)?;
    Ok(())
}
