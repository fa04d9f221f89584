//! Loading a consignment description for the entry point.
//!
//! The description is a JSON object with the consignment's fields (`weight`,
//! `containers`, optionally `description`, `id` and `vessel_id`). Failures here are
//! input defects: they are reported before any orchestration starts.

use crate::model::Consignment;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse consignment: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read and parse the consignment description at `path`.
pub fn load_consignment<P: AsRef<Path>>(path: P) -> Result<Consignment, InputError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_consignment(&data)
}

pub fn parse_consignment(json: &str) -> Result<Consignment, InputError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "description": "This is a test consignment",
        "weight": 550,
        "containers": [
            { "customer_id": "cust001", "user_id": "user001", "origin": "Manchester, United Kingdom" },
            { "customer_id": "cust002", "user_id": "user001", "origin": "Derby, United Kingdom" }
        ]
    }"#;

    #[test]
    fn parses_sample_description() {
        let consignment = parse_consignment(SAMPLE).unwrap();
        assert_eq!(consignment.weight, 550);
        assert_eq!(consignment.containers.len(), 2);
        assert_eq!(consignment.containers[1].origin, "Derby, United Kingdom");
        assert!(consignment.vessel_id.is_none());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = parse_consignment(r#"{"weight": "heavy"}"#);
        assert!(matches!(result, Err(InputError::Parse(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let consignment = load_consignment(file.path()).unwrap();
        assert_eq!(consignment.description, "This is a test consignment");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_consignment("/no/such/consignment.json").unwrap_err();
        assert!(err.to_string().contains("/no/such/consignment.json"));
    }
}
