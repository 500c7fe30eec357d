//! In-process user repository used when no database is configured.
//!
//! Records and the username index live behind one [`RwLock`] so every read
//! observes a single point-in-time state of the store.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

#[derive(Debug, Default)]
struct Records {
    by_id: BTreeMap<UserId, User>,
    by_username: HashMap<String, UserId>,
}

/// Thread-safe, in-memory [`UserRepository`].
///
/// # Examples
/// ```
/// use backend::outbound::persistence::InMemoryUserRepository;
///
/// let repository = InMemoryUserRepository::new();
/// assert!(repository.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: RwLock<Records>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_id
            .len()
    }

    /// Whether the repository holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let username = user.username().as_ref().to_owned();
        if records.by_username.contains_key(&username) {
            return Err(UserPersistenceError::duplicate(username));
        }

        let mut id = UserId::random();
        while records.by_id.contains_key(&id) {
            id = UserId::random();
        }

        let created = User::new(id, user);
        records.by_username.insert(username, id);
        records.by_id.insert(id, created.clone());
        debug!(%id, "user created");
        Ok(created)
    }

    async fn delete_many(&self, ids: &[UserId]) -> Result<usize, UserPersistenceError> {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let mut removed = 0;
        for id in ids {
            if let Some(user) = records.by_id.remove(id) {
                records.by_username.remove(user.username().as_ref());
                removed += 1;
            }
        }
        debug!(requested = ids.len(), removed, "users deleted");
        Ok(removed)
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        let mut users: Vec<User> = records.by_id.values().cloned().collect();
        drop(records);
        users.sort_by(|left, right| left.username().cmp(right.username()));
        Ok(users)
    }
}
