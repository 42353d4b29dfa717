use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::User;

/// Coleção de usuários em memória, compartilhada entre workers via `web::Data`.
///
/// Ids vêm de um contador monotônico, nunca do tamanho da coleção, então
/// dois POSTs concorrentes não recebem o mesmo id.
#[derive(Debug)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
    next_id: AtomicU64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Store já populado com os registros iniciais
    pub fn seeded() -> Self {
        Self::with_users(crate::seeds::users_seed::default_users())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            users: RwLock::new(users),
            next_id: AtomicU64::new(next_id),
        }
    }

    pub fn all(&self) -> Vec<User> {
        self.read().clone()
    }

    pub fn find(&self, id: u64) -> Option<User> {
        self.read().iter().find(|u| u.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Aloca o id e insere sob o mesmo write lock: ordem de inserção == ordem de id
    pub fn insert(&self, name: Option<String>, email: Option<String>) -> User {
        let mut users = self.write();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User { id, name, email };
        users.push(user.clone());
        user
    }

    // Um panic segurando o lock não deixa o Vec inconsistente; recupera o guard.
    fn read(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.users.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        self.users.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_seeded_store_continues_after_seed_ids() {
        let store = UserStore::seeded();
        assert_eq!(store.len(), 2);

        let user = store.insert(Some("Ann".into()), Some("ann@x.com".into()));
        assert_eq!(user.id, 3);
        assert_eq!(store.find(3), Some(user));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_empty_store_starts_at_one() {
        let store = UserStore::new();
        assert_eq!(store.len(), 0);
        assert_eq!(store.insert(None, None).id, 1);
        assert_eq!(store.insert(None, None).id, 2);
    }

    #[test]
    fn test_next_id_follows_max_not_count() {
        let store = UserStore::with_users(vec![User { id: 10, name: None, email: None }]);
        assert_eq!(store.insert(None, None).id, 11);
    }

    #[test]
    fn test_find_missing_returns_none() {
        let store = UserStore::seeded();
        assert!(store.find(9999).is_none());
    }

    #[test]
    fn test_concurrent_inserts_get_distinct_ids() {
        let store = Arc::new(UserStore::seeded());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..50).map(|_| store.insert(None, None).id).collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 400);
        assert_eq!(store.len(), 402);

        let all = store.all();
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }
}
