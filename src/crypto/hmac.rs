//! HMAC-SHA2 signing and constant-time verification.

use crate::algorithms::Algorithm;
use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Compute the raw MAC for `message` under `key` with the named algorithm.
///
/// The algorithm name is resolved against the registry; unknown names fail
/// before any key material is touched.
pub(crate) fn sign(message: &[u8], key: &[u8], algorithm: &str) -> JwtResult<Vec<u8>> {
    match Algorithm::from_name(algorithm) {
        Some(Algorithm::HS256) => sign_hs256(message, key),
        Some(Algorithm::HS384) => sign_hs384(message, key),
        Some(Algorithm::HS512) => sign_hs512(message, key),
        None => Err(JwtError::unsupported_algorithm(algorithm)),
    }
}

/// Recompute the MAC for `message` and compare it against `signature`.
///
/// The comparison runs in constant time with respect to the signature
/// contents; a length mismatch is reported without inspecting bytes.
pub(crate) fn verify(
    message: &[u8],
    key: &[u8],
    algorithm: &str,
    signature: &[u8],
) -> JwtResult<bool> {
    let expected = sign(message, key, algorithm)?;
    Ok(expected.as_slice().ct_eq(signature).into())
}

fn sign_hs256(message: &[u8], key: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|_| JwtError::invalid_key("invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn sign_hs384(message: &[u8], key: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac =
        HmacSha384::new_from_slice(key).map_err(|_| JwtError::invalid_key("invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn sign_hs512(message: &[u8], key: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac =
        HmacSha512::new_from_slice(key).map_err(|_| JwtError::invalid_key("invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
