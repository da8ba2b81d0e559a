/**
 * Password Hashing
 *
 * One-way hashing and verification of plaintext passwords with bcrypt. Each
 * hash embeds its own random salt and work factor, so `verify` needs nothing
 * but the stored digest.
 *
 * bcrypt is deliberately slow. The async wrappers move the work onto the
 * blocking thread pool so request workers are not stalled.
 */

use thiserror::Error;

/// Password hashing errors
///
/// A wrong password is not an error; `verify` returns `Ok(false)`.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt could not hash, or the stored digest is not a bcrypt string
    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// The blocking task running bcrypt died
    #[error("password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher using the given bcrypt cost (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    /// Check a plaintext password against a stored digest
    ///
    /// Comparison is constant-time. Returns `Ok(false)` on mismatch.
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, PasswordError> {
        Ok(bcrypt::verify(plaintext, digest)?)
    }

    /// `hash` on the blocking pool
    pub async fn hash_async(&self, plaintext: String) -> Result<String, PasswordError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext)).await?
    }

    /// `verify` on the blocking pool
    pub async fn verify_async(
        &self,
        plaintext: String,
        digest: String,
    ) -> Result<bool, PasswordError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &digest)).await?
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
