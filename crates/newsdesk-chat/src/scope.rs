//! Indexed scope store.
//!
//! Tracks, per conversation scope, the ordered list of entities most
//! recently shown to the user so later messages can refer to them by
//! number. Each new list replaces the previous one for that scope
//! wholesale; indices are 1-based and contiguous.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::reply::ScopeKey;

/// A displayed entity paired with the index it was shown under.
#[derive(Debug, Clone)]
pub struct IndexedEntry<T> {
    /// 1-based display index.
    pub index: usize,
    pub entity: T,
}

/// Capability interface over a scope store.
///
/// Orchestrators depend on this rather than on the concrete map so the
/// backing store can change (e.g. a bounded TTL store) without touching
/// pipeline code.
pub trait ReferenceStore<T>: Send + Sync {
    /// Replace the scope's current sequence with one entry per input
    /// entity, indices assigned 1..N in input order. Returns the new
    /// sequence for immediate rendering.
    fn add(&self, scope: &ScopeKey, entities: Vec<T>) -> Arc<Vec<IndexedEntry<T>>>;

    /// Look up the entity at a 1-based index. Total over absence: returns
    /// `None` when the scope is empty, the token does not parse as a
    /// positive integer, or the index is out of range.
    fn get(&self, scope: &ScopeKey, token: &str) -> Option<T>;

    /// Whether the token parses as a positive integer within the current
    /// sequence's bounds.
    fn is_valid_index(&self, scope: &ScopeKey, token: &str) -> bool;

    /// The scope's current sequence, if any.
    fn current(&self, scope: &ScopeKey) -> Option<Arc<Vec<IndexedEntry<T>>>>;
}

/// In-memory scope store.
///
/// Sequences are replaced as a whole `Arc`, so readers only ever observe a
/// fully built sequence and a snapshot taken before a replacement stays
/// consistent. Story and Topic references live in separate instances; the
/// same numeral refers to different entities in each.
pub struct ScopeStore<T> {
    inner: Mutex<HashMap<ScopeKey, Arc<Vec<IndexedEntry<T>>>>>,
}

impl<T> ScopeStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    // The store is infallible; a poisoned lock just means another thread
    // panicked mid-replace, and the map itself is still a valid snapshot.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ScopeKey, Arc<Vec<IndexedEntry<T>>>>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<T> Default for ScopeStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a token as a 1-based index.
fn parse_index(token: &str) -> Option<usize> {
    let index: usize = token.trim().parse().ok()?;
    if index == 0 {
        return None;
    }
    Some(index)
}

impl<T: Clone + Send + Sync> ReferenceStore<T> for ScopeStore<T> {
    fn add(&self, scope: &ScopeKey, entities: Vec<T>) -> Arc<Vec<IndexedEntry<T>>> {
        let sequence: Arc<Vec<IndexedEntry<T>>> = Arc::new(
            entities
                .into_iter()
                .enumerate()
                .map(|(i, entity)| IndexedEntry {
                    index: i + 1,
                    entity,
                })
                .collect(),
        );
        self.lock().insert(scope.clone(), Arc::clone(&sequence));
        sequence
    }

    fn get(&self, scope: &ScopeKey, token: &str) -> Option<T> {
        let index = parse_index(token)?;
        let sequence = self.current(scope)?;
        sequence.get(index - 1).map(|entry| entry.entity.clone())
    }

    fn is_valid_index(&self, scope: &ScopeKey, token: &str) -> bool {
        match (parse_index(token), self.current(scope)) {
            (Some(index), Some(sequence)) => index <= sequence.len(),
            _ => false,
        }
    }

    fn current(&self, scope: &ScopeKey) -> Option<Arc<Vec<IndexedEntry<T>>>> {
        self.lock().get(scope).map(Arc::clone)
    }
}
