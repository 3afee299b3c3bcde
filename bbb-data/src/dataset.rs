//! The sample dataset document and its typed records.
//!
//! The document is fetched once and never mutated. Its shape:
//!
//! ```text
//! {
//!   "names":    ["940", "941", ...],
//!   "samples":  [{"id": "940", "otu_ids": [...], "sample_values": [...], "otu_labels": [...]}, ...],
//!   "metadata": [{"id": 940, "ethnicity": "Caucasian", "gender": "F", "age": 24, ...}, ...]
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::sample_id::{whole_number, SampleId};

/// Default location of the published dataset.
pub const DATA_URL: &str = "https://static.bc-edx.com/data/dl-1-2/m14/lms/starter/samples.json";

/// One subject's measurements, stored as parallel arrays.
///
/// Index `i` of `taxon_ids`, `values` and `taxon_labels` describes one
/// measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub id: SampleId,
    #[serde(rename = "otu_ids", deserialize_with = "deserialize_taxon_ids")]
    pub taxon_ids: Vec<i64>,
    #[serde(rename = "sample_values")]
    pub values: Vec<f64>,
    #[serde(rename = "otu_labels")]
    pub taxon_labels: Vec<String>,
}

/// OTU ids are integers, but a document may spell them as integral floats
/// (`1167.0`); both are accepted.
fn deserialize_taxon_ids<'de, D>(deserializer: D) -> std::result::Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    raw.iter()
        .map(|value| {
            value
                .as_i64()
                .or_else(|| value.as_f64().and_then(whole_number))
                .ok_or_else(|| {
                    serde::de::Error::custom(format!("expected an integer OTU id, got {value}"))
                })
        })
        .collect()
}

/// A single (taxon, value, label) triple taken across the parallel arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement<'a> {
    pub taxon_id: i64,
    pub value: f64,
    pub label: &'a str,
}

impl SampleRecord {
    /// Measurements in document order.
    ///
    /// The arrays are not validated; if their lengths disagree only the
    /// common prefix is yielded.
    pub fn measurements(&self) -> impl DoubleEndedIterator<Item = Measurement<'_>> + ExactSizeIterator {
        self.taxon_ids
            .iter()
            .zip(&self.values)
            .zip(&self.taxon_labels)
            .map(|((&taxon_id, &value), label)| Measurement {
                taxon_id,
                value,
                label: label.as_str(),
            })
    }

    /// Number of complete measurements.
    pub fn len(&self) -> usize {
        self.taxon_ids
            .len()
            .min(self.values.len())
            .min(self.taxon_labels.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Demographic attributes for one subject.
///
/// `fields` keeps every key of the source object in document order,
/// including `id` itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    pub id: SampleId,
    pub fields: Map<String, Value>,
}

impl MetadataRecord {
    /// Build a record from a raw metadata object. Returns `None` when the
    /// object has no usable `id`.
    pub fn from_object(fields: Map<String, Value>) -> Option<Self> {
        let id = fields.get("id").and_then(SampleId::from_json)?;
        Some(Self { id, fields })
    }
}

/// Wire shape of the document, before indexing.
#[derive(Deserialize)]
struct RawDataset {
    names: Vec<SampleId>,
    samples: Vec<SampleRecord>,
    metadata: Vec<Map<String, Value>>,
}

/// The whole dataset, indexed by canonical sample id.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawDataset")]
pub struct Dataset {
    names: Vec<SampleId>,
    samples: Vec<SampleRecord>,
    metadata: Vec<MetadataRecord>,
    sample_index: HashMap<SampleId, usize>,
    metadata_index: HashMap<SampleId, usize>,
}

impl From<RawDataset> for Dataset {
    fn from(raw: RawDataset) -> Self {
        let mut sample_index = HashMap::with_capacity(raw.samples.len());
        for (i, sample) in raw.samples.iter().enumerate() {
            // First occurrence wins
            sample_index.entry(sample.id.clone()).or_insert(i);
        }

        let mut metadata = Vec::with_capacity(raw.metadata.len());
        let mut skipped = 0u32;
        for object in raw.metadata {
            match MetadataRecord::from_object(object) {
                Some(record) => metadata.push(record),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            log::warn!("dataset: skipped {} metadata records without an id", skipped);
        }

        let mut metadata_index = HashMap::with_capacity(metadata.len());
        for (i, record) in metadata.iter().enumerate() {
            metadata_index.entry(record.id.clone()).or_insert(i);
        }

        log::info!(
            "dataset: loaded {} names, {} samples, {} metadata records",
            raw.names.len(),
            raw.samples.len(),
            metadata.len()
        );

        Self {
            names: raw.names,
            samples: raw.samples,
            metadata,
            sample_index,
            metadata_index,
        }
    }
}

impl Dataset {
    /// Parse a dataset document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a dataset document from raw bytes (e.g. an HTTP body).
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Fetch and parse the dataset over HTTP.
    #[cfg(feature = "api")]
    pub async fn fetch(url: &str) -> Result<Self> {
        log::info!("dataset: fetching {}", url);
        let response = reqwest::get(url).await?.error_for_status()?;
        let body = response.bytes().await?;
        Self::from_slice(&body)
    }

    /// Sample identifiers in selector order.
    pub fn names(&self) -> &[SampleId] {
        &self.names
    }

    /// The default selection.
    pub fn first_name(&self) -> Option<&SampleId> {
        self.names.first()
    }

    pub fn samples(&self) -> &[SampleRecord] {
        &self.samples
    }

    pub fn metadata(&self) -> &[MetadataRecord] {
        &self.metadata
    }

    pub fn sample(&self, id: &SampleId) -> Option<&SampleRecord> {
        self.sample_index.get(id).map(|&i| &self.samples[i])
    }

    pub fn metadata_for(&self, id: &SampleId) -> Option<&MetadataRecord> {
        self.metadata_index.get(id).map(|&i| &self.metadata[i])
    }
}
