//! Compact-serialization encoder.

use crate::error::{JwtError, JwtResult};
use crate::token::Token;
use crate::{codec, crypto};
use serde_json::Value;

/// Encode and sign a token into its three-segment compact serialization.
///
/// `key` overrides the token's stored key for this call; `algorithm`
/// overrides the header's `alg` field in the produced token. Missing both
/// an explicit and a stored key signs with the empty key. The input token
/// is not modified.
///
/// The operation is atomic: any serialization or signing failure
/// propagates unchanged and produces no partial output.
///
/// # Errors
///
/// [`JwtError::Encoding`] if the header or claims cannot be serialized,
/// [`JwtError::UnsupportedAlgorithm`] if the effective algorithm is not in
/// the registry, and [`JwtError::MissingAlgorithm`] if the header holds no
/// usable `alg` value.
///
/// # Examples
///
/// ```
/// use compact_jwt::{encode, Token};
///
/// let mut token = Token::new();
/// token.set_claim("sub", "1234567890");
/// let jwt = encode(&token, Some(b"secret"), None)?;
/// assert_eq!(jwt.split('.').count(), 3);
/// # Ok::<(), compact_jwt::JwtError>(())
/// ```
pub fn encode(token: &Token, key: Option<&[u8]>, algorithm: Option<&str>) -> JwtResult<String> {
    let headers = match algorithm {
        Some(alg) => {
            let mut headers = token.headers().clone();
            headers.insert("alg".to_string(), Value::String(alg.to_string()));
            headers
        }
        None => token.headers().clone(),
    };

    let header_segment = codec::base64_url_encode(codec::json_encode(&headers)?.as_bytes());
    let claims_segment = codec::base64_url_encode(codec::json_encode(token.claims())?.as_bytes());
    let signing_input = format!("{header_segment}.{claims_segment}");

    let alg = headers
        .get("alg")
        .and_then(Value::as_str)
        .filter(|alg| !alg.is_empty())
        .ok_or(JwtError::MissingAlgorithm)?;
    let key = key.or_else(|| token.key()).unwrap_or(b"");

    let signature = crypto::sign(signing_input.as_bytes(), key, alg)?;
    tracing::trace!(algorithm = alg, "issued compact token");

    Ok(format!(
        "{signing_input}.{}",
        codec::base64_url_encode(&signature)
    ))
}
