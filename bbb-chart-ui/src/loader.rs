//! Browser-side dataset loading.

use bbb_data::{DashboardError, Dataset};

use crate::js_bridge;

/// Fetch and parse the dataset document at `url`.
pub async fn fetch_dataset(url: &str) -> bbb_data::Result<Dataset> {
    log::info!("loader: fetching {}", url);
    let body = js_bridge::fetch_text(url)
        .await
        .map_err(DashboardError::Fetch)?;
    log::info!("loader: received {} bytes", body.len());
    Dataset::from_json_str(&body)
}
