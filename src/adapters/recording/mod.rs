//! Recording adapters that capture interactions to cassettes.
//!
//! Each adapter delegates to an inner port implementation and appends the
//! call's input and outcome to a shared [`CassetteRecorder`].

pub mod callback;
pub mod image_generator;
pub mod object_store;
pub mod translator;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde_json::{json, Value};

use crate::cassette::recorder::CassetteRecorder;
use crate::error::DrawingError;

/// Record a `Result<T, DrawingError>` interaction using the Ok/Err JSON convention.
pub(crate) fn record_result<T, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, DrawingError>,
) where
    T: Serialize,
    I: Serialize,
{
    let input_json = to_json(input);
    let output_json = match result {
        Ok(v) => json!({ "Ok": to_json(v) }),
        Err(e) => json!({ "Err": e.to_string() }),
    };

    let mut guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
    guard.record(port, method, input_json, output_json);
}

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| json!({ "unserializable": e.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_ok_and_err_outcomes() {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new("unused.yaml", "t", "c")));

        let ok: Result<String, DrawingError> = Ok("Hello".into());
        record_result(&recorder, "translator", "translate", &"안녕하세요", &ok);

        let err: Result<(), DrawingError> = Err(DrawingError::Storage("denied".into()));
        record_result(&recorder, "object_store", "upload", &"k.png", &err);

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        assert_eq!(recorder.len(), 2);
    }
}
