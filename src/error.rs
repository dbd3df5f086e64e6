//! Error taxonomy for token encoding, decoding and verification.

use thiserror::Error;

/// Result type for token operations.
pub type JwtResult<T> = std::result::Result<T, JwtError>;

/// Errors surfaced by encoding, decoding and the token container.
///
/// Every failure is terminal for the call that produced it: there is no
/// partial token, no partial string, and nothing is retried or logged
/// inside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Structural problems with the compact serialization: wrong segment
    /// count, undecodable Base64, unparsable JSON, or a segment that does
    /// not hold a JSON object.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// JSON serialization or deserialization failed, with the parser's
    /// classified reason.
    #[error("json codec: {0}")]
    Encoding(#[from] JsonError),

    /// The named algorithm is not in the registry. Raised by both the
    /// encode and decode paths whenever a signature operation is attempted.
    #[error("algorithm not supported: {0}")]
    UnsupportedAlgorithm(String),

    /// The token header carries no usable `alg` value.
    #[error("empty algorithm")]
    MissingAlgorithm,

    /// The recomputed MAC does not match the signature carried by the
    /// token, or the signature segment could not be decoded.
    #[error("signature verification failed")]
    SignatureVerification,

    /// A header or claim field was requested that does not exist.
    #[error("{0} is not a valid value")]
    NotFound(String),

    /// The HMAC could not be initialized from the given key material.
    #[error("invalid key: {0}")]
    InvalidKey(String),
}

impl JwtError {
    /// Create a malformed-token error.
    #[inline]
    #[must_use]
    pub fn malformed(msg: &str) -> Self {
        JwtError::Malformed(msg.to_string())
    }

    /// Create an unsupported-algorithm error.
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }

    /// Create a not-found error for a header or claim key.
    #[inline]
    #[must_use]
    pub fn not_found(key: &str) -> Self {
        JwtError::NotFound(key.to_string())
    }

    /// Create an invalid-key error.
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }
}

/// Classified reasons for a JSON codec failure, mirroring the underlying
/// parser's own error signal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    /// The input nests deeper than the parser's recursion limit.
    #[error("maximum stack depth exceeded")]
    DepthExceeded,

    /// A raw control character appeared inside a JSON string.
    #[error("unexpected control character found")]
    ControlCharacter,

    /// The input is not well-formed JSON.
    #[error("syntax error, malformed JSON")]
    Syntax,

    /// Parsing produced JSON null although the input text was not the
    /// literal `null`, or serialization produced the literal `null` from a
    /// non-null value.
    #[error("null result with non-null input")]
    NullResult,

    /// Any other parser failure, carrying the parser's description.
    #[error("unknown JSON error: {0}")]
    Other(String),
}
