use std::sync::Arc;

use super::CacheKey;
use crate::model::aggregate::EmissionsResultTable;

/// storage for completed pipeline results. results are shared read-only
/// once stored.
pub trait EmissionsCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<Arc<EmissionsResultTable>>;

    fn insert(&self, key: CacheKey, table: Arc<EmissionsResultTable>);

    /// drops every stored result. call after any input dataset changes.
    fn invalidate_all(&self);

    /// drops the stored results of one municipality.
    fn invalidate_municipality(&self, municipality: &str);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
