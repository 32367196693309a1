// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password hashing.
//!
//! User passwords are stored as bcrypt hashes. The cost is a parameter so
//! that tests can hash with [`MIN_COST`].

pub use bcrypt::{BcryptError, DEFAULT_COST};

/// The lowest cost bcrypt accepts.
pub const MIN_COST: u32 = 4;

/// Hashes a plain text password.
///
/// # Errors
///
/// Returns a `BcryptError` if `cost` is outside bcrypt's accepted range.
pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    bcrypt::hash(password, cost)
}

/// Verifies a password against a stored hash.
///
/// # Arguments
///
/// * `password` - The plain text password to verify
/// * `password_hash` - The stored bcrypt hash
///
/// # Errors
///
/// Returns a `BcryptError` if `password_hash` is not a bcrypt hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, password_hash)
}
