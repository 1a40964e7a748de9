//! Deterministic Ed25519 signing for interaction requests.
//!
//! Discord signs every interaction webhook with the application's private key over
//! `timestamp || body`. Tests use a fixed key so the matching public key can be placed
//! in the test configuration.

use ed25519_dalek::{Signer, SigningKey};

/// Seed of the test signing key. Never used outside of tests.
const TEST_SECRET_KEY: [u8; 32] = [7u8; 32];

/// Timestamp header value used by the request helpers.
pub const TEST_TIMESTAMP: &str = "1700000000";

/// Returns the fixed test signing key.
pub fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&TEST_SECRET_KEY)
}

/// Hex encoded public key matching [`signing_key`].
pub fn public_key_hex() -> String {
    hex::encode(signing_key().verifying_key().to_bytes())
}

/// Signs `timestamp || body` and returns the hex encoded detached signature.
///
/// # Arguments
/// - `timestamp` - Value of the timestamp header
/// - `body` - Raw request body
///
/// # Returns
/// - 128 character hex string suitable for the signature header
pub fn sign(timestamp: &str, body: &[u8]) -> String {
    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(body);

    hex::encode(signing_key().sign(&message).to_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signature, Verifier};

    #[test]
    fn signature_verifies_with_public_key() {
        let signature = sign(TEST_TIMESTAMP, br#"{"type":1}"#);
        let bytes: [u8; 64] = hex::decode(signature).unwrap().try_into().unwrap();

        let mut message = TEST_TIMESTAMP.as_bytes().to_vec();
        message.extend_from_slice(br#"{"type":1}"#);

        assert!(signing_key()
            .verifying_key()
            .verify(&message, &Signature::from_bytes(&bytes))
            .is_ok());
        assert_eq!(public_key_hex().len(), 64);
    }
}
