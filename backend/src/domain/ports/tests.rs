//! Contract tests for the user ports.

use super::*;
use crate::domain::{NewUser, User, UserId};
use actix_rt::System;
use async_trait::async_trait;
use rstest::{fixture, rstest};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct StubUserRepository {
    store: Mutex<HashMap<UserId, User>>,
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let mut guard = self.store.lock().expect("store poisoned");
        if guard.values().any(|existing| existing.username() == user.username()) {
            return Err(UserPersistenceError::duplicate(user.username().as_ref()));
        }
        let created = User::new(UserId::random(), user);
        guard.insert(created.id(), created.clone());
        Ok(created)
    }

    async fn delete_many(&self, ids: &[UserId]) -> Result<usize, UserPersistenceError> {
        let mut guard = self.store.lock().expect("store poisoned");
        Ok(ids.iter().filter(|id| guard.remove(id).is_some()).count())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let guard = self.store.lock().expect("store poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[fixture]
fn kody() -> NewUser {
    NewUser::try_from_strings("kody", Some("Kody"), None).expect("valid profile")
}

#[rstest]
fn repository_create_returns_identifier_for_cleanup(kody: NewUser) {
    let repo = StubUserRepository::default();

    System::new().block_on(async move {
        let created = repo.create(kody).await.expect("create succeeds");
        let listed = repo.find_all().await.expect("list succeeds");
        assert_eq!(listed, vec![created.clone()]);

        let removed = repo
            .delete_many(&[created.id(), UserId::random()])
            .await
            .expect("delete succeeds");
        assert_eq!(removed, 1);
        assert!(repo.find_all().await.expect("list succeeds").is_empty());
    });
}

#[rstest]
fn repository_rejects_duplicate_usernames(kody: NewUser) {
    let repo = StubUserRepository::default();

    System::new().block_on(async move {
        repo.create(kody.clone()).await.expect("first create");
        let err = repo.create(kody).await.expect_err("duplicate rejected");
        assert_eq!(err, UserPersistenceError::duplicate("kody"));
    });
}

#[rstest]
#[case(UserPersistenceError::connection("refused"), "user repository connection failed: refused")]
#[case(UserPersistenceError::query("syntax"), "user repository query failed: syntax")]
#[case(UserPersistenceError::duplicate("kody"), "username already taken: kody")]
fn persistence_errors_render_messages(#[case] err: UserPersistenceError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}
