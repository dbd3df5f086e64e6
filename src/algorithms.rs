//! The closed registry of supported signing algorithms.
//!
//! Every entry is an HMAC construction over a SHA-2 hash function. The
//! table is a process-wide constant: initialized before first use, never
//! mutated, safe for any number of concurrent readers without locking.

use crate::error::JwtError;
use std::fmt;
use std::str::FromStr;

/// A signing algorithm accepted in the `alg` header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC over SHA-256.
    HS256,
    /// HMAC over SHA-384.
    HS384,
    /// HMAC over SHA-512.
    HS512,
}

/// Registry of algorithm names. Closed set: nothing outside this table is
/// ever signed with or verified against.
static REGISTRY: &[(&str, Algorithm)] = &[
    ("HS256", Algorithm::HS256),
    ("HS384", Algorithm::HS384),
    ("HS512", Algorithm::HS512),
];

impl Algorithm {
    /// Look up an algorithm by its `alg` header name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, alg)| *alg)
    }

    /// The `alg` header name for this algorithm.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s).ok_or_else(|| JwtError::unsupported_algorithm(s))
    }
}
