use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{UpdateUser, User};

/// Repository trait for User storage
///
/// Lookups report a missing record as `None`/`false`, never as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user, assigning the next id
    async fn create(&self, user: User) -> User;

    /// All users in insertion order
    async fn find_all(&self) -> Vec<User>;

    /// Get a user by ID
    async fn find_by_id(&self, id: u64) -> Option<User>;

    /// Merge the supplied fields onto an existing user
    async fn update(&self, id: u64, input: UpdateUser) -> Option<User>;

    /// Remove a user by ID, returning whether it existed
    async fn delete(&self, id: u64) -> bool;
}

/// Records and id counter, guarded together so id assignment and insertion
/// happen under one write lock.
#[derive(Debug)]
struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of UserRepository
///
/// Cloning shares the underlying store. Reads hand out copies, so stored
/// records change only through `update`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<UserStore>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> User {
        let mut store = self.store.write().await;

        user.id = store.next_id;
        store.next_id += 1;
        store.users.push(user.clone());

        tracing::info!(user_id = user.id, "Created user");
        user
    }

    async fn find_all(&self) -> Vec<User> {
        let store = self.store.read().await;
        store.users.clone()
    }

    async fn find_by_id(&self, id: u64) -> Option<User> {
        let store = self.store.read().await;
        store.users.iter().find(|u| u.id == id).cloned()
    }

    async fn update(&self, id: u64, input: UpdateUser) -> Option<User> {
        let mut store = self.store.write().await;

        let user = store.users.iter_mut().find(|u| u.id == id)?;
        user.apply_update(input);

        tracing::info!(user_id = id, "Updated user");
        Some(user.clone())
    }

    async fn delete(&self, id: u64) -> bool {
        let mut store = self.store.write().await;

        match store.users.iter().position(|u| u.id == id) {
            Some(index) => {
                // `remove`, not `swap_remove`: the rest keep insertion order
                store.users.remove(index);
                tracing::info!(user_id = id, "Deleted user");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();

        let alice = repo.create(User::new("Alice", "alice@x.com")).await;
        assert_eq!(alice.id, 1);
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.email, "alice@x.com");

        let bob = repo.create(User::new("Bob", "bob@x.com")).await;
        assert!(bob.id > alice.id);
    }

    #[tokio::test]
    async fn test_create_overwrites_caller_supplied_id() {
        let repo = InMemoryUserRepository::new();
        let mut user = User::new("Alice", "alice@x.com");
        user.id = 500;

        let created = repo.create(user).await;
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_find_all_preserves_creation_order() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new("Alice", "alice@x.com")).await;
        repo.create(User::new("Bob", "bob@x.com")).await;

        let users = repo.find_all().await;
        assert_eq!(users.len(), 2);
        assert_eq!(names(&users), vec!["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_returns_none() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new("Alice", "alice@x.com")).await;

        assert!(repo.find_by_id(9999).await.is_none());
        assert!(repo.find_by_id(1).await.is_some());
    }

    #[tokio::test]
    async fn test_returned_records_are_copies() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(User::new("Alice", "alice@x.com")).await;

        let mut fetched = repo.find_by_id(created.id).await.unwrap();
        fetched.name = "Mallory".to_string();

        let mut listed = repo.find_all().await;
        listed[0].email = "mallory@x.com".to_string();

        let stored = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn test_update_merges_present_fields() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(User::new("Alice", "alice@x.com")).await;

        let updated = repo
            .update(
                created.id,
                UpdateUser {
                    name: None,
                    email: Some("new@x.com".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.email, "new@x.com");
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryUserRepository::new();
        let result = repo
            .update(
                42,
                UpdateUser {
                    name: Some("Ghost".to_string()),
                    email: None,
                },
            )
            .await;

        assert!(result.is_none());
        assert!(repo.find_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_preserves_order_of_remaining() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new("Alice", "alice@x.com")).await;
        let bob = repo.create(User::new("Bob", "bob@x.com")).await;
        repo.create(User::new("Carol", "carol@x.com")).await;

        assert!(repo.delete(bob.id).await);
        assert!(repo.find_by_id(bob.id).await.is_none());
        assert_eq!(names(&repo.find_all().await), vec!["Alice", "Carol"]);
    }

    #[tokio::test]
    async fn test_delete_twice_returns_false_second_time() {
        let repo = InMemoryUserRepository::new();
        let alice = repo.create(User::new("Alice", "alice@x.com")).await;

        assert!(repo.delete(alice.id).await);
        assert!(!repo.delete(alice.id).await);
        assert!(!repo.delete(9999).await);
    }

    #[tokio::test]
    async fn test_ids_are_never_reused_after_delete() {
        let repo = InMemoryUserRepository::new();
        let first = repo.create(User::new("Alice", "alice@x.com")).await;
        repo.delete(first.id).await;

        let second = repo.create(User::new("Alice", "alice@x.com")).await;
        assert_ne!(first.id, second.id);
        assert!(second.id > first.id);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_distinct_ids() {
        let repo = InMemoryUserRepository::new();

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(User::new(format!("user-{i}"), format!("user-{i}@x.com")))
                        .await
                        .id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(ids, (1..=64).collect::<HashSet<u64>>());
        assert_eq!(repo.find_all().await.len(), 64);
    }
}
