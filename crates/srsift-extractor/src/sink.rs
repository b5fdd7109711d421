//! Persisting extraction results as indented JSON

use crate::error::SinkError;
use crate::types::ExtractionResult;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::path::Path;
use tracing::info;

const INDENT: &[u8] = b"    ";

/// Render a result the way it is written to disk
///
/// Four-space indentation; non-ASCII characters are left unescaped.
pub fn render(result: &ExtractionResult) -> Result<String, SinkError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    result.to_json().serialize(&mut serializer)?;
    buf.push(b'\n');

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write a result to `path`, replacing any existing file
///
/// Parent directories are not created; a missing directory is an error.
pub fn persist(result: &ExtractionResult, path: &Path) -> Result<(), SinkError> {
    let rendered = render(result)?;
    std::fs::write(path, rendered).map_err(|source| SinkError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Extracted data saved to {}", path.display());
    Ok(())
}

/// Read a previously persisted result back
pub fn load(path: &Path) -> Result<ExtractionResult, SinkError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SinkError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&contents)?;
    Ok(ExtractionResult::from_json(value))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::types::FailureReason;
    use proptest::prelude::*;
    use serde_json::Map;
    use tempfile::TempDir;

    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            ".{0,12}".prop_map(Value::from),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::vec(("[a-z_]{1,8}", inner), 0..4)
                    .prop_map(|pairs| Value::Object(pairs.into_iter().collect::<Map<_, _>>())),
            ]
        })
    }

    fn extraction_result() -> impl Strategy<Value = ExtractionResult> {
        let reason = prop_oneof![
            Just(FailureReason::NoValidJsonFound),
            Just(FailureReason::CleanupParseFailed),
        ];
        prop_oneof![
            json_value().prop_map(ExtractionResult::Success),
            (reason, any::<String>())
                .prop_map(|(reason, raw)| ExtractionResult::failure(reason, raw)),
        ]
    }

    /// Exactly the two failure-record keys, nothing else
    fn is_failure_shaped(value: &Value) -> bool {
        value.as_object().is_some_and(|obj| {
            obj.len() == 2 && obj.contains_key("error") && obj.contains_key("raw_response")
        })
    }

    proptest! {
        /// Property: persisting then loading returns an equal result,
        /// except for successes that look like failure records
        #[test]
        fn test_persist_load_round_trip(result in extraction_result()) {
            if let ExtractionResult::Success(value) = &result {
                prop_assume!(!is_failure_shaped(value));
            }

            let dir = TempDir::new().unwrap();
            let path = dir.path().join("out.json");
            persist(&result, &path).unwrap();
            prop_assert_eq!(load(&path).unwrap(), result);
        }
    }
}
