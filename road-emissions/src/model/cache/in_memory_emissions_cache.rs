use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use super::{CacheKey, EmissionsCache};
use crate::model::aggregate::EmissionsResultTable;

#[derive(Debug, Default)]
pub struct InMemoryEmissionsCache {
    entries: Mutex<HashMap<CacheKey, Arc<EmissionsResultTable>>>,
}

impl InMemoryEmissionsCache {
    pub fn new() -> InMemoryEmissionsCache {
        InMemoryEmissionsCache::default()
    }

    // a panic while holding the lock cannot leave a half-written entry
    fn entries(&self) -> MutexGuard<'_, HashMap<CacheKey, Arc<EmissionsResultTable>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EmissionsCache for InMemoryEmissionsCache {
    fn get(&self, key: &CacheKey) -> Option<Arc<EmissionsResultTable>> {
        self.entries().get(key).cloned()
    }

    fn insert(&self, key: CacheKey, table: Arc<EmissionsResultTable>) {
        self.entries().insert(key, table);
    }

    fn invalidate_all(&self) {
        let mut entries = self.entries();
        log::debug!("invalidating {} cached emissions results", entries.len());
        entries.clear();
    }

    fn invalidate_municipality(&self, municipality: &str) {
        self.entries().retain(|k, _| k.municipality != municipality);
    }

    fn len(&self) -> usize {
        self.entries().len()
    }
}
