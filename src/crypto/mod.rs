//! Cryptographic signing primitives.

mod hmac;

pub(crate) use hmac::{sign, verify};
