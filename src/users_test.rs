use super::*;

use std::cell::Cell;

struct FakeDirectory {
    users: Vec<User>,
    all_users_calls: Cell<usize>,
}

impl FakeDirectory {
    fn new(users: Vec<User>) -> FakeDirectory {
        FakeDirectory {
            users,
            all_users_calls: Cell::new(0),
        }
    }
}

impl UserDirectory for FakeDirectory {
    fn find_by_login(&self, login: &str) -> Option<&User> {
        self.users.iter().find(|u| u.login == login)
    }

    fn all_users(&self) -> &[User] {
        self.all_users_calls.set(self.all_users_calls.get() + 1);
        &self.users
    }
}

fn make_user(login: &str, email: Option<&str>) -> User {
    User {
        login: login.to_string(),
        name: None,
        email: email.map(String::from),
    }
}

#[test]
fn test_login_match_wins_without_directory_scan() {
    let directory = FakeDirectory::new(vec![make_user("jane", Some("jane@example.org"))]);
    let mut users = Users::new(&directory, None);

    let user = users.user_for_author("jane").unwrap();
    assert_eq!(user.login, "jane");
    assert_eq!(directory.all_users_calls.get(), 0);
}

#[test]
fn test_login_beats_email_of_another_account() {
    let directory = FakeDirectory::new(vec![
        make_user("jane@example.org", None),
        make_user("jane", Some("jane@example.org")),
    ]);
    let mut users = Users::new(&directory, None);

    let user = users.user_for_author("jane@example.org").unwrap();
    assert_eq!(user.login, "jane@example.org");
}

#[test]
fn test_email_fallback() {
    let directory = FakeDirectory::new(vec![make_user("joe", Some("joe@example.org"))]);
    let mut users = Users::new(&directory, None);

    let user = users.user_for_author("joe@example.org").unwrap();
    assert_eq!(user.login, "joe");
}

#[test]
fn test_email_index_built_once() {
    let directory = FakeDirectory::new(vec![
        make_user("joe", Some("joe@example.org")),
        make_user("jane", Some("jane@example.org")),
    ]);
    let mut users = Users::new(&directory, None);

    users.user_for_author("joe@example.org").unwrap();
    users.user_for_author("jane@example.org").unwrap();
    assert!(users.user_for_author("ghost@example.org").is_err());

    assert_eq!(directory.all_users_calls.get(), 1);
}

#[test]
fn test_email_extracted_between_delimiters() {
    let directory = FakeDirectory::new(vec![make_user("joe", Some("joe@example.org"))]);
    let mut users = Users::new(&directory, Some(("<", ">")));

    let user = users.user_for_author("Joe Dev <joe@example.org>").unwrap();
    assert_eq!(user.login, "joe");
}

#[test]
fn test_author_without_delimiters_used_verbatim() {
    let directory = FakeDirectory::new(vec![make_user("joe", Some("joe@example.org"))]);
    let mut users = Users::new(&directory, Some(("<", ">")));

    let user = users.user_for_author("joe@example.org").unwrap();
    assert_eq!(user.login, "joe");
}

#[test]
fn test_unknown_author() {
    let directory = FakeDirectory::new(vec![make_user("jane", None)]);
    let mut users = Users::new(&directory, None);

    let err = users.user_for_author("nobody").unwrap_err();
    match err {
        AssignError::UserNotFound { author } => assert_eq!(author, "nobody"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unknown_email_error_carries_raw_author() {
    let directory = FakeDirectory::new(vec![make_user("jane", Some("jane@example.org"))]);
    let mut users = Users::new(&directory, Some(("<", ">")));

    let err = users.user_for_author("Ghost <ghost@example.org>").unwrap_err();
    match err {
        AssignError::UserNotFound { author } => assert_eq!(author, "Ghost <ghost@example.org>"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_first_account_with_an_email_wins() {
    let directory = FakeDirectory::new(vec![
        make_user("joe", Some("team@example.org")),
        make_user("jane", Some("team@example.org")),
    ]);
    let mut users = Users::new(&directory, None);

    let user = users.user_for_author("team@example.org").unwrap();
    assert_eq!(user.login, "joe");
}

#[test]
fn test_accounts_without_email_are_not_indexed() {
    let directory = FakeDirectory::new(vec![
        make_user("joe", None),
        make_user("jane", Some("")),
    ]);
    let mut users = Users::new(&directory, None);

    assert!(users.user_for_author("joe@example.org").is_err());
}
