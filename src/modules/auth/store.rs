use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::password::{hash_password, verify_password};
use crate::modules::database::error::is_unique_violation;
use crate::modules::database::statements::{
    COUNT_USERS_BY_USERNAME, INSERT_USER, SELECT_USER_BY_USERNAME,
};
use crate::modules::database::{Gateway, StoreError};
use crate::modules::utils::logging::{log_account_event, AccountOutcome};

/// Represents a registered user. Never changes after registration.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub password_hash: String,
}

// Keeps the digest out of debug output and logs
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

impl User {
    /// Map a `users` row in `user_id, username, password_hash` order
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            user_id: row.get(0)?,
            username: row.get(1)?,
            password_hash: row.get(2)?,
        })
    }
}

impl Gateway {
    /// Register a new user.
    ///
    /// Returns `Ok(false)` without writing anything when the username is taken.
    /// The count query is only advisory: if another process inserts the same
    /// name between the check and the insert, the UNIQUE constraint on
    /// `users.username` rejects the row and that is reported as `Ok(false)` too.
    pub fn register(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let connection = self.connect()?;

        let existing: i64 =
            connection.query_row(COUNT_USERS_BY_USERNAME, params![username], |row| row.get(0))?;
        if existing > 0 {
            log_account_event("register", username, AccountOutcome::UsernameTaken);
            return Ok(false);
        }

        let password_hash = hash_password(password);
        match connection.execute(INSERT_USER, params![username, password_hash]) {
            Ok(_) => {
                log_account_event("register", username, AccountOutcome::Accepted);
                Ok(true)
            }
            Err(e) if is_unique_violation(&e) => {
                debug!("Insert hit the UNIQUE constraint after the count check passed");
                log_account_event("register", username, AccountOutcome::UsernameTaken);
                Ok(false)
            }
            Err(e) => {
                log_account_event("register", username, AccountOutcome::StoreFailure);
                Err(e.into())
            }
        }
    }

    /// Look up a user and check their password.
    ///
    /// Unknown usernames and wrong passwords both yield `Ok(None)`.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>, StoreError> {
        let connection = self.connect()?;

        let user = connection
            .query_row(SELECT_USER_BY_USERNAME, params![username], User::from_row)
            .optional()?;

        match user {
            Some(user) if verify_password(password, &user.password_hash) => {
                log_account_event("login", username, AccountOutcome::Accepted);
                Ok(Some(user))
            }
            Some(_) => {
                debug!("Password mismatch for existing account");
                log_account_event("login", username, AccountOutcome::Rejected);
                Ok(None)
            }
            None => {
                debug!("No account with the given username");
                log_account_event("login", username, AccountOutcome::Rejected);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_gateway() -> (Gateway, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("planner.db");
        let gateway = Gateway::open(path.to_str().unwrap()).unwrap();
        (gateway, dir)
    }

    fn count_users(gateway: &Gateway) -> i64 {
        gateway
            .connect()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM users", (), |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_register_duplicate_username() {
        let (gateway, _dir) = setup_test_gateway();

        assert!(gateway.register("alice", "pw1").unwrap());
        assert_eq!(count_users(&gateway), 1);

        // Second registration with the same name must not insert anything
        assert!(!gateway.register("alice", "pw2").unwrap());
        assert_eq!(count_users(&gateway), 1);

        // Usernames are compared exactly
        assert!(gateway.register("Alice", "pw2").unwrap());
        assert_eq!(count_users(&gateway), 2);
    }

    #[test]
    fn test_register_stores_digest_not_plaintext() {
        let (gateway, _dir) = setup_test_gateway();
        gateway.register("bob", "hunter2").unwrap();

        let stored: String = gateway
            .connect()
            .unwrap()
            .query_row(
                "SELECT password_hash FROM users WHERE username = ?1",
                params!["bob"],
                |row| row.get(0),
            )
            .unwrap();
        assert_ne!(stored, "hunter2");
        assert_eq!(stored, hash_password("hunter2"));
    }

    #[test]
    fn test_unique_constraint_backs_up_count_check() {
        let (gateway, _dir) = setup_test_gateway();
        gateway.register("carol", "pw").unwrap();

        // Simulate a racing insert that skipped the count check
        let err = gateway
            .connect()
            .unwrap()
            .execute(INSERT_USER, params!["carol", hash_password("other")])
            .unwrap_err();
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn test_register_reports_insert_collision_as_taken() {
        let (gateway, _dir) = setup_test_gateway();

        // A case-insensitive index makes the exact-match count miss "ALICE"
        // while the insert still collides with "alice"
        gateway
            .connect()
            .unwrap()
            .execute(
                "CREATE UNIQUE INDEX users_username_nocase ON users(username COLLATE NOCASE)",
                (),
            )
            .unwrap();

        assert!(gateway.register("alice", "pw1").unwrap());
        assert!(!gateway.register("ALICE", "pw2").unwrap());
        assert_eq!(count_users(&gateway), 1);

        // The original account is untouched
        assert!(gateway.authenticate("alice", "pw1").unwrap().is_some());
        assert!(gateway.authenticate("ALICE", "pw2").unwrap().is_none());
    }

    #[test]
    fn test_authenticate() {
        let (gateway, _dir) = setup_test_gateway();
        gateway.register("alice", "pw1").unwrap();

        let user = gateway.authenticate("alice", "pw1").unwrap().unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.password_hash, hash_password("pw1"));

        // Id is stable across logins
        let again = gateway.authenticate("alice", "pw1").unwrap().unwrap();
        assert_eq!(user.user_id, again.user_id);
    }

    #[test]
    fn test_user_debug_hides_digest() {
        let user = User {
            user_id: 1,
            username: "alice".to_string(),
            password_hash: hash_password("pw1"),
        };
        let debug = format!("{:?}", user);
        assert!(debug.contains("alice"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains(&user.password_hash));
    }

    #[test]
    fn test_authenticate_failures_look_identical() {
        let (gateway, _dir) = setup_test_gateway();
        gateway.register("alice", "pw1").unwrap();

        let wrong_password = gateway.authenticate("alice", "pw2").unwrap();
        let unknown_user = gateway.authenticate("mallory", "pw1").unwrap();
        assert_eq!(wrong_password, None);
        assert_eq!(wrong_password, unknown_user);
    }

    #[test]
    fn test_empty_credentials_are_valid_input() {
        let (gateway, _dir) = setup_test_gateway();
        assert!(gateway.register("", "").unwrap());
        assert!(gateway.authenticate("", "").unwrap().is_some());
        assert!(gateway.authenticate("", "x").unwrap().is_none());
    }
}
