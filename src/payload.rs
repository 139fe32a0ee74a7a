//! Adapter from the question API's loose JSON to one canonical payload.
//!
//! The API has shipped several shapes over time:
//! - fields named `soal`/`jawaban` or `question`/`answers`
//! - optionally wrapped in a `data` or `result` envelope
//!
//! Everything past this module sees only [`RawPayload`].

use crate::error::{GameError, Result};
use serde::Deserialize;
use serde_json::Value;

/// A question and its unnormalized answers, as delivered by a loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPayload {
    pub question: String,
    pub answers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WireQuestion {
    soal: Option<Value>,
    question: Option<Value>,
    jawaban: Option<Vec<String>>,
    answers: Option<Vec<String>>,
}

/// Parses a response body into a payload.
///
/// Malformed JSON and wrongly typed fields are transport errors. Missing
/// fields yield empty values, which `Session::create` rejects.
pub fn parse_payload(body: &str) -> Result<RawPayload> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| GameError::Transport(format!("malformed response body: {e}")))?;
    adapt(&value)
}

/// Maps an already-parsed JSON document to a payload.
pub fn adapt(value: &Value) -> Result<RawPayload> {
    let inner = unwrap_envelope(value);
    if !inner.is_object() {
        return Err(GameError::Transport(
            "response body is not a JSON object".to_string(),
        ));
    }

    let wire = WireQuestion::deserialize(inner)
        .map_err(|e| GameError::Transport(format!("unexpected response shape: {e}")))?;

    let question = match [wire.soal, wire.question]
        .into_iter()
        .flatten()
        .find(is_truthy)
    {
        Some(value) => question_text(value)?,
        None => String::new(),
    };
    let answers = wire.jawaban.or(wire.answers).unwrap_or_default();

    Ok(RawPayload { question, answers })
}

fn unwrap_envelope(value: &Value) -> &Value {
    ["data", "result"]
        .iter()
        .filter_map(|key| value.get(key))
        .find(|inner| is_truthy(inner))
        .unwrap_or(value)
}

/// Strings are taken as-is; other scalars are shown in their JSON form.
fn question_text(value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(GameError::Transport(
            "question field is not text".to_string(),
        )),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_indonesian_fields() {
        let payload = parse_payload(r#"{"soal":"Sebutkan buah","jawaban":["Apel","Jeruk"]}"#).unwrap();
        assert_eq!(payload.question, "Sebutkan buah");
        assert_eq!(payload.answers, vec!["Apel", "Jeruk"]);
    }

    #[test]
    fn test_parse_english_fields() {
        let payload = parse_payload(r#"{"question":"Name a fruit","answers":["apple"]}"#).unwrap();
        assert_eq!(payload.question, "Name a fruit");
        assert_eq!(payload.answers, vec!["apple"]);
    }

    #[test]
    fn test_parse_data_envelope() {
        let body = r#"{"status":true,"data":{"soal":"Q","jawaban":["a","b"]}}"#;
        let payload = parse_payload(body).unwrap();
        assert_eq!(payload.question, "Q");
        assert_eq!(payload.answers.len(), 2);
    }

    #[test]
    fn test_parse_result_envelope() {
        let body = r#"{"result":{"question":"Q","answers":["a"]}}"#;
        let payload = parse_payload(body).unwrap();
        assert_eq!(payload.question, "Q");
    }

    #[test]
    fn test_data_envelope_preferred_over_result() {
        let body = r#"{"data":{"soal":"from data","jawaban":["a"]},"result":{"soal":"from result","jawaban":["b"]}}"#;
        assert_eq!(parse_payload(body).unwrap().question, "from data");
    }

    #[test]
    fn test_null_data_falls_back_to_result() {
        let body = r#"{"data":null,"result":{"soal":"Q","jawaban":["a"]}}"#;
        assert_eq!(parse_payload(body).unwrap().question, "Q");
    }

    #[test]
    fn test_soal_preferred_over_question() {
        let body = r#"{"soal":"soal","question":"question","jawaban":["a"]}"#;
        assert_eq!(parse_payload(body).unwrap().question, "soal");
    }

    #[test]
    fn test_empty_soal_falls_back_to_question() {
        let body = r#"{"soal":"","question":"question","jawaban":["a"]}"#;
        assert_eq!(parse_payload(body).unwrap().question, "question");
    }

    #[test]
    fn test_numeric_soal_is_shown_as_text() {
        let body = r#"{"data":{"soal":2024,"jawaban":["a"]}}"#;
        assert_eq!(parse_payload(body).unwrap().question, "2024");
    }

    #[test]
    fn test_zero_soal_falls_back_to_question() {
        let body = r#"{"soal":0,"question":"question","jawaban":["a"]}"#;
        assert_eq!(parse_payload(body).unwrap().question, "question");
    }

    #[test]
    fn test_object_question_is_transport_error() {
        let err = parse_payload(r#"{"soal":{"text":"Q"},"jawaban":["a"]}"#).unwrap_err();
        assert!(matches!(err, GameError::Transport(_)));
    }

    #[test]
    fn test_jawaban_preferred_over_answers() {
        let body = r#"{"soal":"Q","jawaban":["x"],"answers":["y"]}"#;
        assert_eq!(parse_payload(body).unwrap().answers, vec!["x"]);
    }

    #[test]
    fn test_missing_fields_yield_empty_payload() {
        let payload = parse_payload(r#"{"status":200}"#).unwrap();
        assert_eq!(payload, RawPayload::default());
    }

    #[test]
    fn test_malformed_json_is_transport_error() {
        let err = parse_payload("<html>502</html>").unwrap_err();
        assert!(matches!(err, GameError::Transport(_)));
    }

    #[test]
    fn test_non_string_answers_are_transport_error() {
        let err = parse_payload(r#"{"soal":"Q","jawaban":[1,2]}"#).unwrap_err();
        assert!(matches!(err, GameError::Transport(_)));
    }

    #[test]
    fn test_top_level_array_is_transport_error() {
        let err = parse_payload(r#"[{"soal":"Q"}]"#).unwrap_err();
        assert!(matches!(err, GameError::Transport(_)));
    }
}
