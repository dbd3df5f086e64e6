//! Compact-serialization decoder and verifier.

use crate::error::{JwtError, JwtResult};
use crate::token::Token;
use crate::{codec, crypto};
use serde_json::{Map, Value};

/// Decode a compact token and verify its signature with `key`.
///
/// The pipeline is linear: segment split, structural decode of header and
/// claims, algorithm check, signature check. Each step either fully
/// succeeds or aborts the whole call; there is no partial result.
///
/// Verification recomputes the MAC over the first two dot-joined segments
/// exactly as transmitted and compares it against the token's signature in
/// constant time.
///
/// # Errors
///
/// [`JwtError::Malformed`] for a wrong segment count or a header/claims
/// segment that fails Base64, UTF-8 or JSON decoding (or is not a JSON
/// object); [`JwtError::MissingAlgorithm`] if the header has no usable
/// `alg`; [`JwtError::UnsupportedAlgorithm`] for an `alg` outside the
/// registry; [`JwtError::SignatureVerification`] if the signature segment
/// is undecodable or does not match the recomputed MAC.
///
/// # Examples
///
/// ```
/// use compact_jwt::{decode, encode, Token};
///
/// let mut token = Token::new();
/// token.set_claim("sub", "1234567890");
/// let jwt = encode(&token, Some(b"secret"), None)?;
///
/// let decoded = decode(&jwt, b"secret")?;
/// assert_eq!(decoded.claim("sub")?.as_str(), Some("1234567890"));
/// # Ok::<(), compact_jwt::JwtError>(())
/// ```
pub fn decode(jwt: &str, key: &[u8]) -> JwtResult<Token> {
    decode_parts(jwt, key, true)
}

/// Decode a compact token **without any verification**.
///
/// No signature comparison and no algorithm check happen at all: the
/// result establishes no trust whatsoever in the returned header or
/// claims. An attacker can forge every field of a token accepted by this
/// function. Use it only to inspect a token structurally (for example to
/// read a key-id hint before choosing a key), and never as a substitute
/// for [`decode`].
///
/// # Errors
///
/// [`JwtError::Malformed`] for the structural failures described on
/// [`decode`]; no other error is possible.
pub fn dangerous_insecure_decode(jwt: &str) -> JwtResult<Token> {
    decode_parts(jwt, b"", false)
}

fn decode_parts(jwt: &str, key: &[u8], verify: bool) -> JwtResult<Token> {
    let segments: Vec<&str> = jwt.split('.').collect();
    let (header_b64, claims_b64, signature_b64) = match segments.as_slice() {
        [header, claims, signature] => (*header, *claims, *signature),
        _ => return Err(JwtError::malformed("wrong number of segments")),
    };

    let headers = decode_segment(header_b64)?;
    let claims = decode_segment(claims_b64)?;

    if verify {
        let alg = headers
            .get("alg")
            .and_then(Value::as_str)
            .filter(|alg| !alg.is_empty())
            .ok_or(JwtError::MissingAlgorithm)?;

        // A signature segment that does not even decode is a failed
        // verification, not a malformed token.
        let provided = codec::base64_url_decode(signature_b64)
            .map_err(|_| JwtError::SignatureVerification)?;

        // Sign the transmitted bytes, never a re-serialized equivalent;
        // JSON re-encoding is not guaranteed byte-identical.
        let signing_input = format!("{header_b64}.{claims_b64}");
        if !crypto::verify(signing_input.as_bytes(), key, alg, &provided)? {
            return Err(JwtError::SignatureVerification);
        }
        tracing::trace!(algorithm = alg, "verified compact token");
    }

    let mut token = Token::new();
    token.set_headers(headers).set_claims(claims);
    Ok(token)
}

fn decode_segment(segment: &str) -> JwtResult<Map<String, Value>> {
    let bytes = codec::base64_url_decode(segment)
        .map_err(|_| JwtError::malformed("invalid segment encoding"))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| JwtError::malformed("invalid segment encoding"))?;
    let value = codec::json_decode(&text)
        .map_err(|_| JwtError::malformed("invalid segment encoding"))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(JwtError::malformed("invalid segment encoding")),
    }
}
