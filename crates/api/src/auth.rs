// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User registration and credential checks.

use movie_catalogue_domain::User;
use movie_catalogue_loader::password::{hash_password, verify_password};
use movie_catalogue_repository::Repository;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::password_policy::PasswordPolicy;
use crate::request_response::{LoginRequest, LoginResponse, RegisterUserRequest};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Registers a new user, storing a bcrypt hash of their password.
///
/// # Arguments
///
/// * `repo` - The repository to add the user to
/// * `request` - The requested username and plain text password
/// * `policy` - The password policy to enforce
/// * `password_cost` - The bcrypt cost to hash with
///
/// # Errors
///
/// Returns an error if:
/// - The username is blank
/// - The username is already registered
/// - The password violates the policy
/// - Hashing fails
pub fn register_user<R: Repository + ?Sized>(
    repo: &mut R,
    request: &RegisterUserRequest,
    policy: &PasswordPolicy,
    password_cost: u32,
) -> Result<LoginResponse, ApiError> {
    let username: &str = request.username.trim();
    if username.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("username"),
            message: String::from("Username must not be empty"),
        });
    }
    if repo.get_user(username).is_some() {
        return Err(ApiError::DuplicateUsername {
            username: username.to_string(),
        });
    }
    policy.validate(&request.password, username)?;

    let password_hash: String =
        hash_password(&request.password, password_cost).map_err(|e| ApiError::Internal {
            message: format!("Failed to hash password: {e}"),
        })?;
    repo.add_user(User::new(username, &password_hash));

    info!(username, "Registered user");
    Ok(LoginResponse {
        username: username.to_string(),
    })
}

/// Checks a username and password against the stored hash.
///
/// An unknown username and a wrong password fail the same way.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` if the credentials do not match.
pub fn authenticate<R: Repository + ?Sized>(
    repo: &R,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let failed = || ApiError::AuthenticationFailed {
        reason: String::from(INVALID_CREDENTIALS),
    };

    let user: &User = repo.get_user(&request.username).ok_or_else(failed)?;
    let password_hash: &str = user.password().ok_or_else(failed)?;

    match verify_password(&request.password, password_hash) {
        Ok(true) => {
            info!(username = %request.username, "User authenticated");
            Ok(LoginResponse {
                username: request.username.clone(),
            })
        }
        Ok(false) => Err(failed()),
        Err(e) => {
            warn!(username = %request.username, error = %e, "Stored password is not a bcrypt hash");
            Err(failed())
        }
    }
}
