// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the service layer.

use movie_catalogue_domain::{DomainError, MovieId};
use movie_catalogue_repository::RepositoryError;

use crate::password_policy::PasswordPolicyError;

/// Service-level errors.
///
/// These are distinct from domain and repository errors and represent the
/// service contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No movie has the requested id.
    NonExistentMovie {
        /// The requested id.
        id: MovieId,
    },
    /// No user has the requested username.
    UnknownUser {
        /// The requested username.
        username: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A user with this username is already registered.
    DuplicateUsername {
        /// The username that was taken.
        username: String,
    },
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonExistentMovie { id } => write!(f, "Movie {id} does not exist"),
            Self::UnknownUser { username } => write!(f, "User '{username}' does not exist"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DuplicateUsername { username } => {
                write!(f, "Username '{username}' is already taken")
            }
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        translate_repository_error(err)
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into a service error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::DuplicateAssociation { kind, .. } => ApiError::DomainRuleViolation {
            rule: format!("unique_{kind}_association"),
            message,
        },
        DomainError::InvalidRuntime(_) => ApiError::InvalidInput {
            field: String::from("runtime_minutes"),
            message,
        },
        DomainError::RuntimeNotSet(_) => ApiError::DomainRuleViolation {
            rule: String::from("runtime_required"),
            message,
        },
        DomainError::IdAlreadyAssigned { .. } => ApiError::DomainRuleViolation {
            rule: String::from("single_id_assignment"),
            message,
        },
    }
}

/// Translates a repository error into a service error.
#[must_use]
pub fn translate_repository_error(err: RepositoryError) -> ApiError {
    match err {
        RepositoryError::InvalidAssociation { .. } => ApiError::DomainRuleViolation {
            rule: String::from("review_attached"),
            message: err.to_string(),
        },
        RepositoryError::DuplicateMovieId(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_movie_id"),
            message: err.to_string(),
        },
        RepositoryError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
