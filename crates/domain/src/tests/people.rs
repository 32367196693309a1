// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Actor, Director, DomainError, Genre, Movie, MovieKey, Name, User};

#[test]
fn test_genre_construction() {
    let genre: Genre = Genre::new(" New Zealand ");

    assert_eq!(genre.name().as_str(), Some("New Zealand"));
    assert_eq!(genre.number_of_movies(), 0);
    assert!(genre.movies().is_empty());
    assert!(!genre.is_applied_to(&Movie::new("", 1900)));
    assert_eq!(genre.to_string(), "<Genre New Zealand>");
}

#[test]
fn test_invalid_genre_name_degrades_to_absent() {
    let genre: Genre = Genre::new("");

    assert!(!genre.name().is_present());
    assert_eq!(genre.to_string(), "<Genre None>");
}

#[test]
fn test_genre_identity_and_order_by_name() {
    assert_eq!(Genre::new("Action"), Genre::new(" Action"));
    assert!(Genre::new("Action") < Genre::new("Adventure"));
}

#[test]
fn test_director_construction() {
    let director: Director = Director::new("Taika Waititi  ");

    assert_eq!(director.name().as_str(), Some("Taika Waititi"));
    assert!(director.movies().is_empty());
    assert_eq!(director.to_string(), "<Director Taika Waititi>");
    assert!(Director::new("Ang Lee") < Director::new("Peter Jackson"));
}

#[test]
fn test_actor_construction() {
    let actor: Actor = Actor::new("Angelina Jolie");

    assert_eq!(actor.name().as_str(), Some("Angelina Jolie"));
    assert!(actor.movies().is_empty());
    assert_eq!(actor.colleagues().count(), 0);
    assert_eq!(actor.to_string(), "<Actor Angelina Jolie>");
}

#[test]
fn test_actor_colleagues_are_one_sided() {
    let mut angelina: Actor = Actor::new("Angelina Jolie");
    let brad: Actor = Actor::new("Brad Pitt");

    angelina.add_actor_colleague(&brad);

    assert!(angelina.check_if_this_actor_worked_with(&brad));
    assert!(!brad.check_if_this_actor_worked_with(&angelina));
}

#[test]
fn test_actor_ignores_self_and_nameless_colleagues() {
    let mut angelina: Actor = Actor::new("Angelina Jolie");
    let same: Actor = Actor::new("Angelina Jolie");
    let nameless: Actor = Actor::new("  ");

    angelina.add_actor_colleague(&same);
    angelina.add_actor_colleague(&nameless);

    assert_eq!(angelina.colleagues().count(), 0);
}

#[test]
fn test_actor_colleague_added_once() {
    let mut angelina: Actor = Actor::new("Angelina Jolie");
    let brad: Actor = Actor::new("Brad Pitt");

    angelina.add_actor_colleague(&brad);
    angelina.add_actor_colleague(&brad);

    let colleagues: Vec<&Name> = angelina.colleagues().collect();
    assert_eq!(colleagues, vec![&Name::new("Brad Pitt")]);
}

#[test]
fn test_user_construction() {
    let user: User = User::new("dbowie", "1234567890");

    assert_eq!(user.username(), Some("dbowie"));
    assert_eq!(user.password(), Some("1234567890"));
    assert!(user.reviews().is_empty());
    assert!(user.watched_movies().is_empty());
    assert_eq!(user.time_spent_watching_movies_minutes(), 0);
    assert_eq!(user.to_string(), "<User dbowie>");
}

#[test]
fn test_user_invalid_fields_degrade_to_absent() {
    let user: User = User::new("", "");

    assert_eq!(user.username(), None);
    assert_eq!(user.password(), None);
}

#[test]
fn test_user_identity_and_order_by_username() {
    assert_eq!(User::new("dbowie", "a"), User::new("dbowie", "b"));
    assert!(User::new("dbowie", "a") < User::new("fmercury", "a"));
}

#[test]
fn test_watch_movie_accumulates_runtime() {
    let mut user: User = User::new("dbowie", "1234567890");
    let mut moana: Movie = Movie::new("Moana", 2016);
    moana.set_runtime_minutes(107).unwrap();
    let mut split: Movie = Movie::new("Split", 2016);
    split.set_runtime_minutes(117).unwrap();

    user.watch_movie(&moana).unwrap();
    user.watch_movie(&split).unwrap();
    user.watch_movie(&moana).unwrap();

    assert_eq!(user.time_spent_watching_movies_minutes(), 331);
    assert_eq!(
        user.watched_movies(),
        &[
            MovieKey::new("Moana", 2016),
            MovieKey::new("Split", 2016),
            MovieKey::new("Moana", 2016),
        ]
    );
}

#[test]
fn test_watch_movie_without_runtime_fails() {
    let mut user: User = User::new("dbowie", "1234567890");
    let movie: Movie = Movie::new("Moana", 2016);

    let err: DomainError = user.watch_movie(&movie).unwrap_err();

    assert_eq!(err, DomainError::RuntimeNotSet(MovieKey::new("Moana", 2016)));
    assert!(user.watched_movies().is_empty());
    assert_eq!(user.time_spent_watching_movies_minutes(), 0);
}
