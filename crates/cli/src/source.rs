//! Reading the schema document from disk or over HTTP.

use std::time::Duration;

use tgtypes_core::Schema;
use tracing::debug;

use crate::config::SchemaSource;

/// Upper bound for the whole schema download.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Load and parse the schema from `source`.
pub(crate) async fn load_schema(source: &SchemaSource) -> Result<Schema, String> {
    let text = match source {
        SchemaSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|err| format!("Failed to read schema file {}: {err}", path.display()))?,
        SchemaSource::Url(url) => fetch_schema(url).await?,
    };
    debug!(source = %source, bytes = text.len(), "Read schema document.");

    Schema::from_json(&text).map_err(|err| format!("Failed to load schema from {source}: {err}"))
}

/// One GET, no retries.
async fn fetch_schema(url: &str) -> Result<String, String> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|err| format!("Failed to create HTTP client: {err}"))?;

    debug!(url, "Fetching schema.");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| format!("Failed to fetch schema from {url}: {err}"))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("Failed to fetch schema from {url}: HTTP {status}"));
    }

    response
        .text()
        .await
        .map_err(|err| format!("Failed to read schema response from {url}: {err}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SCHEMA: &str = r#"{
        "version": { "major": 7, "minor": 1, "patch": 0 },
        "methods": [],
        "objects": [{ "name": "User", "description": "A user.", "properties": [] }]
    }"#;

    #[tokio::test]
    async fn test_load_schema_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.json");
        std::fs::write(&path, SCHEMA).unwrap();

        let schema = load_schema(&SchemaSource::File(path)).await.unwrap();
        assert_eq!(schema.version.to_string(), "7.1.0");
        assert_eq!(schema.objects.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_schema(&SchemaSource::File(temp_dir.path().join("nope.json")))
            .await
            .unwrap_err();
        assert!(err.starts_with("Failed to read schema file"), "{err}");
    }

    #[tokio::test]
    async fn test_load_schema_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/custom.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SCHEMA))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/custom.json", server.uri());
        let schema = load_schema(&SchemaSource::Url(url)).await.unwrap();
        assert_eq!(schema.objects[0].name, "User");
    }

    #[tokio::test]
    async fn test_http_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/custom.json", server.uri());
        let err = load_schema(&SchemaSource::Url(url)).await.unwrap_err();
        assert!(err.ends_with("HTTP 404 Not Found"), "{err}");
    }

    #[tokio::test]
    async fn test_invalid_schema_names_the_source() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"version\": 7}"))
            .mount(&server)
            .await;

        let url = format!("{}/custom.json", server.uri());
        let err = load_schema(&SchemaSource::Url(url.clone())).await.unwrap_err();
        assert!(
            err.starts_with(&format!("Failed to load schema from {url}: Failed to parse schema at `version`")),
            "{err}"
        );
    }
}
