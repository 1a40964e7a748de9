use ed25519_dalek::{Signature, VerifyingKey};

/// Verifies a Discord interaction signature.
///
/// The signed message is the byte concatenation of `timestamp` and the raw body, with no
/// separator. Every malformed input (non-hex text, wrong lengths, invalid curve points)
/// counts as a failed verification rather than an error, so the caller can answer a
/// uniform 401.
///
/// # Arguments
/// - `raw_body` - Request body exactly as received
/// - `signature_hex` - Value of the signature header, 64 bytes hex encoded
/// - `timestamp` - Value of the timestamp header
/// - `public_key_hex` - Application public key, 32 bytes hex encoded
///
/// # Returns
/// - `true` - Signature is valid for this key and message
/// - `false` - Anything else
pub fn verify(raw_body: &[u8], signature_hex: &str, timestamp: &str, public_key_hex: &str) -> bool {
    let Some(key_bytes) = decode_fixed::<32>(public_key_hex) else {
        return false;
    };
    let Some(signature_bytes) = decode_fixed::<64>(signature_hex) else {
        return false;
    };

    let Ok(key) = VerifyingKey::from_bytes(&key_bytes) else {
        return false;
    };
    let signature = Signature::from_bytes(&signature_bytes);

    let mut message = Vec::with_capacity(timestamp.len() + raw_body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(raw_body);

    key.verify_strict(&message, &signature).is_ok()
}

fn decode_fixed<const N: usize>(value: &str) -> Option<[u8; N]> {
    hex::decode(value).ok()?.try_into().ok()
}
