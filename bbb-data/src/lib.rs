//! Data layer for the belly button biodiversity dashboard.
//!
//! This crate owns everything that does not touch the browser:
//!
//! - [`dataset`]: the fetched JSON document, indexed by canonical sample id
//! - [`projection`]: bar, bubble and metadata projections for one sample
//! - [`figure`]: Plotly trace/layout descriptions built from projections
//! - [`dashboard`]: the controller that drives a [`dashboard::DashboardView`]
//!
//! # Usage
//!
//! ```rust
//! use bbb_data::{projection, Dataset, SampleId};
//!
//! let ds = Dataset::from_json_str(r#"{
//!     "names": ["940"],
//!     "samples": [{"id": "940", "otu_ids": [1167, 2859], "sample_values": [163, 126], "otu_labels": ["a", "b"]}],
//!     "metadata": [{"id": 940, "age": 24}]
//! }"#).unwrap();
//!
//! let id = SampleId::from("940");
//! let bar = projection::project_bar(&ds, &id).unwrap();
//! assert_eq!(bar.labels, vec!["OTU 2859", "OTU 1167"]);
//! assert_eq!(projection::project_metadata(&ds, &id).lines(), vec!["id: 940", "age: 24"]);
//! ```

pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod figure;
pub mod projection;
pub mod sample_id;

pub use dashboard::{Dashboard, DashboardView};
pub use dataset::{Dataset, MetadataRecord, SampleRecord, DATA_URL};
pub use error::{DashboardError, Result};
pub use sample_id::SampleId;
