use super::*;

struct Directory {
    users: Vec<User>,
}

impl UserDirectory for Directory {
    fn find_by_login(&self, login: &str) -> Option<&User> {
        self.users.iter().find(|u| u.login == login)
    }

    fn all_users(&self) -> &[User] {
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

fn make_directory() -> Directory {
    Directory {
        users: vec![
            make_user("jane", Some("jane@example.org")),
            make_user("joe", None),
            make_user("admin", None),
        ],
    }
}

fn make_settings(default_login: Option<&str>, override_login: Option<&str>) -> Settings {
    Settings {
        default_assignee: default_login.map(String::from),
        override_assignee: override_login.map(String::from),
        ..Default::default()
    }
}

#[test]
fn test_override_wins_over_author() {
    let directory = make_directory();
    let settings = make_settings(Some("admin"), Some("joe"));
    let mut assign = Assign::new(&settings, &directory);

    let user = assign.assignee(Some("jane")).unwrap();
    assert_eq!(user.login, "joe");
}

#[test]
fn test_author_used_without_override() {
    let directory = make_directory();
    let settings = make_settings(Some("admin"), None);
    let mut assign = Assign::new(&settings, &directory);

    let user = assign.assignee(Some("jane")).unwrap();
    assert_eq!(user.login, "jane");
}

#[test]
fn test_unknown_author_falls_back_to_default() {
    let directory = make_directory();
    let settings = make_settings(Some("admin"), None);
    let mut assign = Assign::new(&settings, &directory);

    let user = assign.assignee(Some("nobody")).unwrap();
    assert_eq!(user.login, "admin");
}

#[test]
fn test_no_author_uses_default() {
    let directory = make_directory();
    let settings = make_settings(Some("admin"), None);
    let mut assign = Assign::new(&settings, &directory);

    let user = assign.assignee(None).unwrap();
    assert_eq!(user.login, "admin");
}

#[test]
fn test_unresolvable_override_degrades_to_chain() {
    let directory = make_directory();
    let settings = make_settings(Some("admin"), Some("ghost"));
    let mut assign = Assign::new(&settings, &directory);

    let user = assign.assignee(Some("jane")).unwrap();
    assert_eq!(user.login, "jane");
}

#[test]
fn test_empty_override_is_unset() {
    let directory = make_directory();
    let settings = make_settings(Some("admin"), Some(""));
    let mut assign = Assign::new(&settings, &directory);

    let user = assign.assignee(Some("jane")).unwrap();
    assert_eq!(user.login, "jane");
}

#[test]
fn test_override_resolvable_by_email() {
    let directory = make_directory();
    let settings = make_settings(Some("admin"), Some("jane@example.org"));
    let mut assign = Assign::new(&settings, &directory);

    let user = assign.assignee(None).unwrap();
    assert_eq!(user.login, "jane");
}

#[test]
fn test_missing_default_propagates() {
    let directory = make_directory();
    let settings = make_settings(None, None);
    let mut assign = Assign::new(&settings, &directory);

    let err = assign.assignee(None).unwrap_err();
    match err {
        AssignError::SettingNotConfigured { key } => assert_eq!(key, keys::DEFAULT_ASSIGNEE),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unresolvable_default_propagates() {
    let directory = make_directory();
    let settings = make_settings(Some("ghost"), None);
    let mut assign = Assign::new(&settings, &directory);

    let err = assign.assignee(Some("nobody")).unwrap_err();
    assert!(matches!(err, AssignError::UserNotFound { .. }));
}
