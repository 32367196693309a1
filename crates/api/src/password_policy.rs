// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy validation.
//!
//! Applies to passwords chosen at registration. Passwords loaded from the
//! data files are taken as they are.

use thiserror::Error;

/// Password policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// Password is too short.
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },

    /// Password lacks a required character class.
    #[error("Password must contain at least one {class}")]
    MissingCharacterClass { class: &'static str },

    /// Password is the username.
    #[error("Password must not match the username")]
    MatchesUsername,
}

/// Password policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum password length, in characters.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 7 }
    }
}

impl PasswordPolicy {
    /// Validates a password for `username`.
    ///
    /// A valid password has at least `min_length` characters, an uppercase
    /// letter, a lowercase letter and a digit, and differs from the username
    /// ignoring case.
    ///
    /// # Errors
    ///
    /// Returns the first `PasswordPolicyError` the password fails.
    pub fn validate(&self, password: &str, username: &str) -> Result<(), PasswordPolicyError> {
        if password.chars().count() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }

        let classes: [(&'static str, fn(&char) -> bool); 3] = [
            ("uppercase letter", char::is_ascii_uppercase),
            ("lowercase letter", char::is_ascii_lowercase),
            ("digit", char::is_ascii_digit),
        ];
        for (class, matches) in classes {
            if !password.chars().any(|c| matches(&c)) {
                return Err(PasswordPolicyError::MissingCharacterClass { class });
            }
        }

        if password.to_lowercase() == username.to_lowercase() {
            return Err(PasswordPolicyError::MatchesUsername);
        }

        Ok(())
    }
}
