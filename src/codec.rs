//! URL-safe Base64 framing and classified JSON encode/decode.
//!
//! Both pipelines share this module: segments are framed with the URL-safe
//! Base64 alphabet (padding stripped on output, tolerated on input) and
//! header/claims travel as compact JSON.

use crate::error::{JsonError, JwtError, JwtResult};
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{alphabet, Engine as _};
use serde::Serialize;
use serde_json::Value;

/// URL-safe alphabet, no `=` padding on encode, padding indifferent on
/// decode (inputs are accepted with or without restored padding).
const URL_SAFE_FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes with URL-safe Base64, trailing padding stripped.
#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_FORGIVING.encode(input)
}

/// Decode a URL-safe Base64 string. Callers map the error into the public
/// taxonomy according to which segment failed.
#[inline]
pub(crate) fn base64_url_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_FORGIVING.decode(input)
}

/// Serialize a value into compact JSON.
///
/// Fails if the value holds something JSON cannot represent, or if a
/// non-null value unexpectedly serializes to the literal `null`.
pub(crate) fn json_encode<T: Serialize>(value: &T) -> JwtResult<String> {
    let json = serde_json::to_string(value).map_err(|e| JwtError::Encoding(classify(&e)))?;
    if json == "null" {
        let tree = serde_json::to_value(value).map_err(|e| JwtError::Encoding(classify(&e)))?;
        if !tree.is_null() {
            return Err(JwtError::Encoding(JsonError::NullResult));
        }
    }
    Ok(json)
}

/// Parse JSON text into a value tree.
///
/// Failures carry the parser's classified reason. A parse that yields JSON
/// null while the input text is not the literal `null` is also an error.
pub(crate) fn json_decode(input: &str) -> JwtResult<Value> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| JwtError::Encoding(classify(&e)))?;
    if value.is_null() && input != "null" {
        return Err(JwtError::Encoding(JsonError::NullResult));
    }
    Ok(value)
}

/// Map a serde_json failure onto the reason codes the callers pattern-match
/// on. The recursion-limit and control-character cases are detected from
/// the parser's own message; everything else in the syntax/EOF categories
/// collapses to a generic syntax error.
fn classify(err: &serde_json::Error) -> JsonError {
    use serde_json::error::Category;

    let msg = err.to_string();
    if msg.contains("recursion limit exceeded") {
        JsonError::DepthExceeded
    } else if msg.contains("control character") {
        JsonError::ControlCharacter
    } else if matches!(err.classify(), Category::Syntax | Category::Eof) {
        JsonError::Syntax
    } else {
        JsonError::Other(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base64_url_round_trip() {
        let data = b"{\"typ\":\"JWT\",\"alg\":\"HS256\"}";
        let encoded = base64_url_encode(data);
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert_eq!(base64_url_decode(&encoded).as_deref(), Ok(&data[..]));
    }

    #[test]
    fn test_base64_url_decode_accepts_restored_padding() {
        // "e30" is {} without padding; "e30=" is the padded spelling.
        assert_eq!(base64_url_decode("e30").as_deref(), Ok(&b"{}"[..]));
        assert_eq!(base64_url_decode("e30=").as_deref(), Ok(&b"{}"[..]));
    }

    #[test]
    fn test_base64_url_decode_rejects_invalid_input() {
        assert!(base64_url_decode("not*base64").is_err());
        // A single trailing symbol cannot come from any byte sequence.
        assert!(base64_url_decode("abcde").is_err());
    }

    #[test]
    fn test_json_encode_is_compact_and_ordered() {
        let mut map = serde_json::Map::new();
        map.insert("typ".to_string(), json!("JWT"));
        map.insert("alg".to_string(), json!("HS256"));
        assert_eq!(
            json_encode(&map).as_deref(),
            Ok("{\"typ\":\"JWT\",\"alg\":\"HS256\"}")
        );
    }

    #[test]
    fn test_json_encode_null_input_is_fine() {
        assert_eq!(json_encode(&Value::Null).as_deref(), Ok("null"));
    }

    #[test]
    fn test_json_decode_classifies_syntax_errors() {
        assert_eq!(
            json_decode("{\"a\":"),
            Err(JwtError::Encoding(JsonError::Syntax))
        );
        assert_eq!(
            json_decode("not json"),
            Err(JwtError::Encoding(JsonError::Syntax))
        );
    }

    #[test]
    fn test_json_decode_classifies_depth_overflow() {
        let deep = format!("{}1{}", "[".repeat(200), "]".repeat(200));
        assert_eq!(
            json_decode(&deep),
            Err(JwtError::Encoding(JsonError::DepthExceeded))
        );
    }

    #[test]
    fn test_json_decode_classifies_control_characters() {
        let input = "{\"a\":\"b\u{0001}c\"}";
        assert_eq!(
            json_decode(input),
            Err(JwtError::Encoding(JsonError::ControlCharacter))
        );
    }

    #[test]
    fn test_json_decode_null_literal_only() {
        assert_eq!(json_decode("null"), Ok(Value::Null));
        // Whitespace-padded null parses, but the input is not the literal.
        assert_eq!(
            json_decode(" null "),
            Err(JwtError::Encoding(JsonError::NullResult))
        );
    }
}
