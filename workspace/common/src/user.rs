//! User records and the in-memory directory backing the mock login.

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The password is stored in plaintext: this directory is a browser-side
/// stand-in for a backend user table, not a credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// In-memory user directory, optionally hydrated from a persisted
/// snapshot at startup.
///
/// The directory itself enforces nothing: uniqueness and password rules
/// are the signup flow's job, and persistence is an explicit call made
/// by the owner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory containing the single default account used when no
    /// snapshot has ever been persisted.
    pub fn seeded() -> Self {
        Self {
            users: vec![UserRecord {
                id: 1,
                name: "Shahriar Alom Masud".to_string(),
                email: "masud.nil74@gmail.com".to_string(),
                password: "123456".to_string(),
            }],
        }
    }

    pub fn from_records(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// Replaces the whole directory with externally supplied records.
    pub fn hydrate(&mut self, users: Vec<UserRecord>) {
        self.users = users;
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Exact, case-sensitive email match.
    pub fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn find_by_id(&self, id: u32) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Matches an exact (email, password) pair.
    pub fn verify_credentials(&self, email: &str, password: &str) -> Option<&UserRecord> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
    }

    /// Appends a record. Callers must have validated email uniqueness.
    pub fn add(&mut self, user: UserRecord) {
        self.users.push(user);
    }

    /// Next sequential id. Not collision-safe if records were ever
    /// deleted; nothing here deletes them.
    pub fn next_id(&self) -> u32 {
        self.users.len() as u32 + 1
    }

    /// Snapshot as a JSON array, the shape stored under the `usersDB`
    /// storage key.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.users).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parses a snapshot produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Vec<UserRecord>>(json) {
            Ok(users) => Some(Self { users }),
            Err(err) => {
                log::warn!("Unreadable user directory snapshot: {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, email: &str, password: &str) -> UserRecord {
        UserRecord {
            id,
            name: format!("User {}", id),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_seeded_directory_has_default_account() {
        let directory = UserDirectory::seeded();
        assert_eq!(directory.len(), 1);
        let user = directory
            .find_by_email("masud.nil74@gmail.com")
            .expect("seed user present");
        assert_eq!(user.id, 1);
    }

    #[test]
    fn test_find_by_email_is_case_sensitive() {
        let directory = UserDirectory::from_records(vec![record(1, "a@x.com", "secret")]);
        assert!(directory.find_by_email("a@x.com").is_some());
        assert!(directory.find_by_email("A@x.com").is_none());
    }

    #[test]
    fn test_verify_credentials_requires_exact_pair() {
        let directory = UserDirectory::from_records(vec![record(1, "a@x.com", "secret")]);
        assert!(directory.verify_credentials("a@x.com", "secret").is_some());
        assert!(directory.verify_credentials("a@x.com", "wrong").is_none());
        assert!(directory.verify_credentials("b@x.com", "secret").is_none());
    }

    #[test]
    fn test_seeded_login_credentials() {
        let directory = UserDirectory::seeded();
        let user = directory
            .verify_credentials("masud.nil74@gmail.com", "123456")
            .expect("seeded credentials should verify");
        assert_eq!(user.id, 1);
    }

    #[test]
    fn test_hydrate_replaces_everything() {
        let mut directory = UserDirectory::seeded();
        directory.hydrate(vec![record(5, "only@x.com", "pw")]);
        assert_eq!(directory.len(), 1);
        assert!(directory.find_by_id(1).is_none());
        assert!(directory.find_by_id(5).is_some());
    }

    #[test]
    fn test_next_id_is_len_plus_one() {
        let mut directory = UserDirectory::new();
        assert_eq!(directory.next_id(), 1);
        directory.add(record(1, "a@x.com", "pw"));
        directory.add(record(2, "b@x.com", "pw"));
        assert_eq!(directory.next_id(), 3);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let directory =
            UserDirectory::from_records(vec![record(1, "a@x.com", "pw"), record(2, "b@x.com", "pw")]);
        let restored = UserDirectory::from_json(&directory.to_json()).expect("snapshot parses");
        assert_eq!(restored, directory);
    }

    #[test]
    fn test_snapshot_is_a_plain_array() {
        let directory = UserDirectory::from_records(vec![record(1, "a@x.com", "pw")]);
        assert!(directory.to_json().starts_with('['));
    }

    #[test]
    fn test_bad_snapshot_is_rejected() {
        assert!(UserDirectory::from_json("{\"users\": 3}").is_none());
        assert!(UserDirectory::from_json("not json").is_none());
    }
}
