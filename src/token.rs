//! The token container: one header mapping, one claims mapping, and an
//! optional symmetric key.

use crate::error::{JwtError, JwtResult};
use serde_json::{Map, Value};
use std::fmt;
use zeroize::Zeroizing;

/// An in-memory token: header fields, claim fields, and an optional key.
///
/// A fresh token carries the default header `{"typ": "JWT", "alg":
/// "HS256"}` and no claims. Fields are mutable until the token is encoded;
/// once serialized, the wire bytes are the source of truth. Each token is
/// owned by a single encode or produced by a single decode; clone it if a
/// copy must outlive the call.
///
/// Header and claim mappings are insertion-ordered, so the encoded JSON
/// reproduces the order in which fields were set. The key is held in
/// zeroizing storage, is wiped on drop, and is never serialized into the
/// token.
#[derive(Clone)]
pub struct Token {
    headers: Map<String, Value>,
    claims: Map<String, Value>,
    key: Option<Zeroizing<Vec<u8>>>,
}

impl Token {
    /// Create a token with the default header and empty claims.
    #[must_use]
    pub fn new() -> Self {
        let mut headers = Map::new();
        headers.insert("typ".to_string(), Value::String("JWT".to_string()));
        headers.insert("alg".to_string(), Value::String("HS256".to_string()));
        Self {
            headers,
            claims: Map::new(),
            key: None,
        }
    }

    /// Get a single header field.
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::NotFound`] if the field is absent.
    pub fn header(&self, key: &str) -> JwtResult<&Value> {
        self.headers.get(key).ok_or_else(|| JwtError::not_found(key))
    }

    /// Set a single header field.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// All header fields.
    #[must_use]
    pub fn headers(&self) -> &Map<String, Value> {
        &self.headers
    }

    /// Merge a mapping of header fields into the existing headers.
    ///
    /// Fields already present keep their position and take the new value;
    /// defaults not mentioned in `headers` survive.
    pub fn set_headers(&mut self, headers: Map<String, Value>) -> &mut Self {
        for (key, value) in headers {
            self.headers.insert(key, value);
        }
        self
    }

    /// Get a single claim field.
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::NotFound`] if the field is absent.
    pub fn claim(&self, key: &str) -> JwtResult<&Value> {
        self.claims.get(key).ok_or_else(|| JwtError::not_found(key))
    }

    /// Set a single claim field.
    pub fn set_claim(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.claims.insert(key.into(), value.into());
        self
    }

    /// Remove a claim field, returning its value if it was present.
    ///
    /// Removing an absent field is a no-op. The insertion order of the
    /// remaining claims is unchanged.
    pub fn remove_claim(&mut self, key: &str) -> Option<Value> {
        self.claims.shift_remove(key)
    }

    /// All claim fields.
    #[must_use]
    pub fn claims(&self) -> &Map<String, Value> {
        &self.claims
    }

    /// Merge a mapping of claim fields into the existing claims.
    pub fn set_claims(&mut self, claims: Map<String, Value>) -> &mut Self {
        for (key, value) in claims {
            self.claims.insert(key, value);
        }
        self
    }

    /// The stored symmetric key, if one has been set.
    #[must_use]
    pub fn key(&self) -> Option<&[u8]> {
        self.key.as_deref().map(Vec::as_slice)
    }

    /// Store a symmetric key on the token.
    pub fn set_key(&mut self, key: impl Into<Vec<u8>>) -> &mut Self {
        self.key = Some(Zeroizing::new(key.into()));
        self
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("headers", &self.headers)
            .field("claims", &self.claims)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
