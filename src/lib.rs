//! Compact JSON Web Token signing and verification over HMAC-SHA2.
//!
//! This crate implements the three-segment compact serialization: a token
//! is `base64url(header JSON) . base64url(claims JSON) . base64url(MAC)`,
//! where the MAC is an HMAC over the first two dot-joined segments. The
//! registry of algorithms is closed: `HS256`, `HS384` and `HS512`.
//!
//! Two pure, stateless pipelines share the [`Token`] data model: [`encode`]
//! turns a populated token into a signed string, and [`decode`] parses a
//! string back into a token after verifying its signature in constant
//! time. Claim semantics such as expiry are deliberately out of scope; the
//! caller owns the meaning of every claim.
//!
//! All operations are synchronous and free of shared mutable state, so any
//! number of threads may encode and decode concurrently without
//! coordination.
//!
//! # Examples
//!
//! ```
//! use compact_jwt::{decode, encode, Token};
//!
//! let mut token = Token::new();
//! token
//!     .set_claim("sub", "1234567890")
//!     .set_claim("name", "John Doe");
//!
//! let jwt = encode(&token, Some(b"secret"), None)?;
//! let verified = decode(&jwt, b"secret")?;
//! assert_eq!(verified.claims(), token.claims());
//! # Ok::<(), compact_jwt::JwtError>(())
//! ```

mod algorithms;
pub(crate) mod codec;
mod crypto;
mod decode;
mod encode;
mod error;
mod token;

pub use algorithms::Algorithm;
pub use decode::{dangerous_insecure_decode, decode};
pub use encode::encode;
pub use error::{JsonError, JwtError, JwtResult};
pub use token::Token;
