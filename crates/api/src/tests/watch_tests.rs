// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use movie_catalogue_domain::{Movie, MovieId, User};
use movie_catalogue_repository::{MemoryRepository, Repository};

use crate::tests::helpers::create_test_repository;
use crate::{ApiError, WatchRecord, watch_movie};

#[test]
fn test_can_watch_movie() {
    let mut repo: MemoryRepository = create_test_repository();

    let record: WatchRecord = watch_movie(&mut repo, "thorke", MovieId::new(3)).unwrap();

    assert_eq!(record.username, "thorke");
    assert_eq!(record.movies_watched, 1);
    assert_eq!(record.time_spent_watching_movies_minutes, 117);
}

#[test]
fn test_watching_again_adds_up() {
    let mut repo: MemoryRepository = create_test_repository();

    watch_movie(&mut repo, "thorke", MovieId::new(3)).unwrap();
    let record: WatchRecord = watch_movie(&mut repo, "thorke", MovieId::new(3)).unwrap();

    assert_eq!(record.movies_watched, 2);
    assert_eq!(record.time_spent_watching_movies_minutes, 234);
}

#[test]
fn test_cannot_watch_non_existent_movie() {
    let mut repo: MemoryRepository = create_test_repository();

    let err: ApiError = watch_movie(&mut repo, "thorke", MovieId::new(99)).unwrap_err();

    assert_eq!(
        err,
        ApiError::NonExistentMovie {
            id: MovieId::new(99)
        }
    );
}

#[test]
fn test_unknown_user_cannot_watch() {
    let mut repo: MemoryRepository = create_test_repository();

    let err: ApiError = watch_movie(&mut repo, "nobody", MovieId::new(3)).unwrap_err();

    assert!(matches!(err, ApiError::UnknownUser { .. }));
}

#[test]
fn test_cannot_watch_movie_without_runtime() {
    let mut repo: MemoryRepository = create_test_repository();
    repo.add_movie(Movie::new("Moana", 2016), MovieId::new(6), "")
        .unwrap();

    let err: ApiError = watch_movie(&mut repo, "thorke", MovieId::new(6)).unwrap_err();

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "runtime_required"
    ));
    let user: &User = repo.get_user("thorke").unwrap();
    assert!(user.watched_movies().is_empty());
    assert_eq!(user.time_spent_watching_movies_minutes(), 0);
}
