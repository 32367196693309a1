// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use movie_catalogue_loader::password::MIN_COST;
use movie_catalogue_repository::{MemoryRepository, Repository};

use crate::tests::helpers::create_test_repository;
use crate::{
    ApiError, LoginRequest, LoginResponse, PasswordPolicy, RegisterUserRequest, authenticate,
    register_user,
};

fn register(
    repo: &mut MemoryRepository,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let request: RegisterUserRequest = RegisterUserRequest {
        username: String::from(username),
        password: String::from(password),
    };
    register_user(repo, &request, &PasswordPolicy::default(), MIN_COST)
}

fn login(
    repo: &MemoryRepository,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let request: LoginRequest = LoginRequest {
        username: String::from(username),
        password: String::from(password),
    };
    authenticate(repo, &request)
}

#[test]
fn test_can_register_and_authenticate() {
    let mut repo: MemoryRepository = create_test_repository();

    let registered: LoginResponse = register(&mut repo, "pmccartney", "Abcd1234").unwrap();
    assert_eq!(registered.username, "pmccartney");

    let stored_hash: &str = repo.get_user("pmccartney").unwrap().password().unwrap();
    assert_ne!(stored_hash, "Abcd1234");

    let logged_in: LoginResponse = login(&repo, "pmccartney", "Abcd1234").unwrap();
    assert_eq!(logged_in.username, "pmccartney");
}

#[test]
fn test_registered_username_is_trimmed() {
    let mut repo: MemoryRepository = create_test_repository();

    register(&mut repo, "  pmccartney ", "Abcd1234").unwrap();

    assert!(repo.get_user("pmccartney").is_some());
}

#[test]
fn test_cannot_register_duplicate_username() {
    let mut repo: MemoryRepository = create_test_repository();

    let err: ApiError = register(&mut repo, "thorke", "Abcd1234").unwrap_err();

    assert_eq!(
        err,
        ApiError::DuplicateUsername {
            username: String::from("thorke")
        }
    );
}

#[test]
fn test_cannot_register_blank_username() {
    let mut repo: MemoryRepository = create_test_repository();

    let err: ApiError = register(&mut repo, "   ", "Abcd1234").unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "username"));
}

#[test]
fn test_cannot_register_weak_password() {
    let mut repo: MemoryRepository = create_test_repository();

    let err: ApiError = register(&mut repo, "pmccartney", "abcd").unwrap_err();

    assert!(matches!(err, ApiError::PasswordPolicyViolation { .. }));
    assert!(repo.get_user("pmccartney").is_none());
}

#[test]
fn test_loaded_users_authenticate_with_file_passwords() {
    let repo: MemoryRepository = create_test_repository();

    assert!(login(&repo, "thorke", "ilovebeer").is_ok());
    assert!(login(&repo, "fmercury", "8734gfe2058v").is_ok());
}

#[test]
fn test_wrong_password_and_unknown_user_fail_alike() {
    let repo: MemoryRepository = create_test_repository();

    let wrong_password: ApiError = login(&repo, "thorke", "ilovewine").unwrap_err();
    let unknown_user: ApiError = login(&repo, "gmichael", "ilovebeer").unwrap_err();

    assert!(matches!(wrong_password, ApiError::AuthenticationFailed { .. }));
    assert_eq!(wrong_password, unknown_user);
}

#[test]
fn test_plain_text_password_never_authenticates() {
    let mut repo: MemoryRepository = MemoryRepository::new();
    repo.add_user(movie_catalogue_domain::User::new("legacy", "Abcd1234"));

    let err: ApiError = login(&repo, "legacy", "Abcd1234").unwrap_err();

    assert!(matches!(err, ApiError::AuthenticationFailed { .. }));
}
