//! Ed25519 verification of Discord interaction requests.

use crate::domain::DomainError;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Parse the application's hex public key from the developer portal.
pub fn parse_public_key(public_key_hex: &str) -> Result<VerifyingKey, DomainError> {
    let bytes = hex::decode(public_key_hex.trim())
        .map_err(|e| DomainError::Config(format!("Invalid public key hex: {}", e)))?;
    let bytes: [u8; 32] = bytes
        .try_into()
        .map_err(|_| DomainError::Config("Public key must be 32 bytes".into()))?;
    VerifyingKey::from_bytes(&bytes)
        .map_err(|e| DomainError::Config(format!("Invalid public key: {}", e)))
}

/// True when `signature_hex` signs `timestamp || body` under `public_key`.
pub fn verify_signature(
    public_key: &VerifyingKey,
    signature_hex: &str,
    timestamp: &str,
    body: &str,
) -> bool {
    let Ok(signature_bytes) = hex::decode(signature_hex) else {
        return false;
    };
    let Ok(signature) = <[u8; 64]>::try_from(signature_bytes) else {
        return false;
    };
    let signature = Signature::from_bytes(&signature);

    let message = format!("{}{}", timestamp, body);
    public_key.verify(message.as_bytes(), &signature).is_ok()
}
