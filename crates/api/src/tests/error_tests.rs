// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use movie_catalogue_domain::{AssociationKind, DomainError, MovieId, MovieKey};
use movie_catalogue_repository::{RepositoryError, ReviewParty};

use crate::{ApiError, PasswordPolicyError, translate_domain_error, translate_repository_error};

#[test]
fn test_duplicate_association_becomes_rule_violation() {
    let err: ApiError = translate_domain_error(DomainError::DuplicateAssociation {
        kind: AssociationKind::Genre,
        name: String::from("Horror"),
        movie: MovieKey::new("Split", 2016),
    });

    match err {
        ApiError::DomainRuleViolation { rule, message } => {
            assert_eq!(rule, "unique_genre_association");
            assert!(message.contains("Horror"));
        }
        other => panic!("Expected DomainRuleViolation, got {other:?}"),
    }
}

#[test]
fn test_invalid_runtime_becomes_invalid_input() {
    let err: ApiError = DomainError::InvalidRuntime(-5).into();

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "runtime_minutes"
    ));
}

#[test]
fn test_repository_errors_are_translated() {
    let err: ApiError = translate_repository_error(RepositoryError::InvalidAssociation {
        party: ReviewParty::Movie,
    });
    assert_eq!(
        err,
        ApiError::DomainRuleViolation {
            rule: String::from("review_attached"),
            message: String::from("Review not correctly attached to a movie"),
        }
    );

    let err: ApiError = RepositoryError::DuplicateMovieId(MovieId::new(3)).into();
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "unique_movie_id"
    ));
}

#[test]
fn test_wrapped_domain_error_is_unwrapped() {
    let err: ApiError = RepositoryError::DomainViolation(DomainError::RuntimeNotSet(
        MovieKey::new("Moana", 2016),
    ))
    .into();

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "runtime_required"
    ));
}

#[test]
fn test_password_policy_error_is_translated() {
    let err: ApiError = PasswordPolicyError::MatchesUsername.into();

    assert_eq!(
        err.to_string(),
        "Password policy violation: Password must not match the username"
    );
}

#[test]
fn test_api_error_display() {
    assert_eq!(
        ApiError::NonExistentMovie {
            id: MovieId::new(7)
        }
        .to_string(),
        "Movie 7 does not exist"
    );
    assert_eq!(
        ApiError::UnknownUser {
            username: String::from("gmichael")
        }
        .to_string(),
        "User 'gmichael' does not exist"
    );
    assert_eq!(
        ApiError::DuplicateUsername {
            username: String::from("thorke")
        }
        .to_string(),
        "Username 'thorke' is already taken"
    );
}
