//! Discord interaction webhook primitives.
//!
//! Everything needed to turn an HTTP request from Discord into a typed interaction and
//! back: signature verification, payload decoding and the response envelope.

pub mod model;
pub mod response;
pub mod verify;

/// Header carrying the hex encoded Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";

/// Header carrying the timestamp that prefixes the signed message.
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";
