//! Replaying adapters that serve recorded interactions from cassettes.

pub mod callback;
pub mod image_generator;
pub mod object_store;
pub mod translator;

use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cassette::replayer::CassetteReplayer;

/// Retrieve the next recorded output for a given port and method.
///
/// # Panics
///
/// Panics if the cassette has no more interactions for the pair.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Value {
    let mut guard = replayer.lock().unwrap_or_else(PoisonError::into_inner);
    guard.next_interaction(port, method).output
}

/// Decode a replayed output as `Result<T, String>`.
///
/// Outputs follow the `{"Ok": ..}` / `{"Err": ".."}` convention; a bare value
/// is treated as `Ok`.
pub(crate) fn replay_result<T: DeserializeOwned>(output: Value) -> Result<T, String> {
    if let Some(err_val) = output.get("Err").or_else(|| output.get("err")) {
        return Err(err_val.as_str().unwrap_or("replayed error").to_string());
    }
    let value = match output {
        Value::Object(mut map) if map.contains_key("Ok") => map.remove("Ok").unwrap_or(Value::Null),
        Value::Object(mut map) if map.contains_key("ok") => map.remove("ok").unwrap_or(Value::Null),
        other => other,
    };
    serde_json::from_value(value).map_err(|e| format!("Malformed replayed output: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_value_decoded() {
        let text: String = replay_result(json!({"Ok": "Hello"})).unwrap();
        assert_eq!(text, "Hello");
    }

    #[test]
    fn ok_null_decodes_unit() {
        replay_result::<()>(json!({"Ok": null})).unwrap();
    }

    #[test]
    fn err_value_becomes_message() {
        let err = replay_result::<String>(json!({"Err": "model timed out"})).unwrap_err();
        assert_eq!(err, "model timed out");
    }

    #[test]
    fn bare_value_is_ok() {
        let n: u16 = replay_result(json!(200)).unwrap();
        assert_eq!(n, 200);
    }

    #[test]
    fn wrong_shape_is_error() {
        let err = replay_result::<u16>(json!({"Ok": "not a number"})).unwrap_err();
        assert!(err.contains("Malformed replayed output"));
    }
}
