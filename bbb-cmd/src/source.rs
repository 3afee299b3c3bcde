//! Dataset sources: an HTTP(S) URL or a local JSON file.

use anyhow::Context;
use bbb_data::Dataset;

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load the dataset from `source`, fetching it when it is a URL.
pub async fn load(source: &str) -> anyhow::Result<Dataset> {
    if is_url(source) {
        return Dataset::fetch(source)
            .await
            .with_context(|| format!("Failed to load dataset from {}", source));
    }

    log::info!("Reading dataset from {}", source);
    let bytes = tokio::fs::read(source)
        .await
        .with_context(|| format!("Failed to read {}", source))?;
    Dataset::from_slice(&bytes).with_context(|| format!("Failed to parse {}", source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbb_data::SampleId;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("bbb-cmd-{}-{}", std::process::id(), name))
    }

    #[test]
    fn detects_urls() {
        assert!(is_url("https://static.bc-edx.com/samples.json"));
        assert!(is_url("http://localhost:8000/samples.json"));
        assert!(!is_url("fixtures/samples.json"));
    }

    #[tokio::test]
    async fn loads_local_file() {
        let path = temp_path("samples.json");
        std::fs::write(
            &path,
            r#"{"names": ["940"], "samples": [{"id": "940", "otu_ids": [1], "sample_values": [2], "otu_labels": ["x"]}], "metadata": []}"#,
        )
        .unwrap();

        let ds = load(path.to_str().unwrap()).await.unwrap();
        assert_eq!(ds.names(), &[SampleId::from("940")]);

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let path = temp_path("does-not-exist.json");
        let err = load(path.to_str().unwrap()).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let path = temp_path("broken.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load(path.to_str().unwrap()).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));

        std::fs::remove_file(&path).unwrap();
    }
}
