//! Salted password digests for user and admin accounts.
//!
//! Stored format: `salt:digest`, both lowercase hex. The salt is 16 random
//! bytes; the digest is SHA-256 over the salt's hex text followed by the
//! plaintext. Other components treat the stored string as opaque.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::DatabaseError;

const SALT_LEN: usize = 16;

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn digest(salt: &str, plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(plaintext.as_bytes());
    to_hex(&hasher.finalize())
}

/// Hash a plaintext password with a fresh random salt.
///
/// # Errors
///
/// Returns `DatabaseError::Credential` if the password is empty or the OS
/// random source fails.
pub fn hash_password(plaintext: &str) -> Result<String, DatabaseError> {
    if plaintext.is_empty() {
        return Err(DatabaseError::Credential("password must not be empty".into()));
    }
    let mut salt = [0u8; SALT_LEN];
    getrandom::fill(&mut salt)
        .map_err(|e| DatabaseError::Credential(format!("failed to generate salt: {e}")))?;
    let salt = to_hex(&salt);
    let digest = digest(&salt, plaintext);
    Ok(format!("{salt}:{digest}"))
}

/// Check a plaintext password against a stored `salt:digest`.
///
/// A malformed stored value never verifies.
#[must_use]
pub fn verify_password(plaintext: &str, stored: &str) -> bool {
    let Some((salt, expected)) = stored.split_once(':') else {
        return false;
    };
    if salt.is_empty() || expected.is_empty() {
        return false;
    }
    digest(salt, plaintext)
        .as_bytes()
        .ct_eq(expected.as_bytes())
        .into()
}
