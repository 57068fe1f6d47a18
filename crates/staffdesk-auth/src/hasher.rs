//! Password hashing

use crate::error::{AuthError, AuthResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

const ALGORITHM: &str = "sha256";
const SALT_LEN: usize = 16;

/// Password hasher trait
///
/// # Examples
///
/// ```
/// use staffdesk_auth::{PasswordHasher, SaltedSha256Hasher};
///
/// let hasher = SaltedSha256Hasher::new();
/// let hash = hasher.hash("Abc12345").unwrap();
///
/// assert!(hasher.verify("Abc12345", &hash).unwrap());
/// assert!(!hasher.verify("abc12345", &hash).unwrap());
/// ```
pub trait PasswordHasher: Send + Sync {
	/// Hashes a password into a self-describing string
	fn hash(&self, password: &str) -> AuthResult<String>;

	/// Verifies a password against a hash produced by [`PasswordHasher::hash`]
	///
	/// Returns `Ok(false)` for a wrong password and an error for a malformed hash.
	fn verify(&self, password: &str, hash: &str) -> AuthResult<bool>;
}

/// Salted SHA-256 hasher for the in-memory backend.
///
/// Hashes are stored as `sha256$<salt>$<digest>` with unpadded base64
/// parts. Digests are compared in constant time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaltedSha256Hasher;

impl SaltedSha256Hasher {
	pub fn new() -> Self {
		Self
	}

	fn digest(salt: &[u8], password: &str) -> Vec<u8> {
		Sha256::new()
			.chain_update(salt)
			.chain_update(password.as_bytes())
			.finalize()
			.to_vec()
	}
}

impl PasswordHasher for SaltedSha256Hasher {
	fn hash(&self, password: &str) -> AuthResult<String> {
		let mut salt = [0u8; SALT_LEN];
		rand::thread_rng().fill_bytes(&mut salt);

		let digest = Self::digest(&salt, password);
		Ok(format!(
			"{}${}${}",
			ALGORITHM,
			STANDARD_NO_PAD.encode(salt),
			STANDARD_NO_PAD.encode(digest)
		))
	}

	fn verify(&self, password: &str, hash: &str) -> AuthResult<bool> {
		let mut parts = hash.splitn(3, '$');
		let (Some(algorithm), Some(salt), Some(expected)) = (parts.next(), parts.next(), parts.next())
		else {
			return Err(AuthError::Hashing("malformed hash".to_string()));
		};

		if algorithm != ALGORITHM {
			return Err(AuthError::Hashing(format!("unsupported algorithm: {}", algorithm)));
		}

		let salt = STANDARD_NO_PAD
			.decode(salt)
			.map_err(|e| AuthError::Hashing(e.to_string()))?;
		let expected = STANDARD_NO_PAD
			.decode(expected)
			.map_err(|e| AuthError::Hashing(e.to_string()))?;

		let actual = Self::digest(&salt, password);
		Ok(actual.as_slice().ct_eq(expected.as_slice()).into())
	}
}
