use super::Plan;

use modelmap_core::{FieldId, FieldTag, Flavor, Record};

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use tracing::debug;

/// Statement kinds a plan can be compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
    /// Save that resolved to an upsert. Save's insert and update scenarios
    /// share the `Create` and `Update` plans.
    Save,
}

/// Which fields a caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subset {
    /// Every field of the record.
    Full,

    /// An explicit list of field ordinals, sorted and without duplicates.
    ///
    /// Never equal to `Full`, even when it names every field.
    Fields(Vec<usize>),
}

impl Subset {
    pub fn of(fields: &[FieldId]) -> Subset {
        let mut ordinals: Vec<_> = fields.iter().map(|field| field.ordinal()).collect();
        ordinals.sort_unstable();
        ordinals.dedup();
        Subset::Fields(ordinals)
    }

    pub fn contains(&self, ordinal: usize) -> bool {
        match self {
            Subset::Full => true,
            Subset::Fields(ordinals) => ordinals.binary_search(&ordinal).is_ok(),
        }
    }
}

/// Identifies one compiled plan.
///
/// Besides operation, table, and requested fields, the key carries the
/// record type, the flavor, and which key fields currently hold a value:
/// key presence decides the shape of every statement (`WHERE` columns,
/// returned sequence keys, conflict targets).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    operation: Operation,
    table: &'static str,
    record: TypeId,
    flavor: Flavor,
    subset: Subset,
    present: Vec<bool>,
}

impl CacheKey {
    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn subset(&self) -> &Subset {
        &self.subset
    }
}

/// Schema-derived facts about one record type, computed on first use.
#[derive(Debug)]
pub struct Columns {
    /// Column names, as reported by the record type.
    pub names: &'static [&'static str],

    /// Primary-key and unique fields, in declaration order.
    pub keys: Vec<(usize, FieldTag<'static>)>,
}

impl Columns {
    fn new(record: &dyn Record) -> Columns {
        let keys = record
            .tags()
            .iter()
            .enumerate()
            .map(|(ordinal, &src)| (ordinal, FieldTag::parse(src)))
            .filter(|(ordinal, tag)| {
                tag.is_mapped()
                    && (tag.primary_key || tag.unique)
                    && record.field(*ordinal).is_some()
            })
            .collect();

        Columns {
            names: record.columns(),
            keys,
        }
    }

    /// Current presence of every key field of `record`.
    pub fn presence(&self, record: &dyn Record) -> Vec<bool> {
        self.keys
            .iter()
            .map(|(ordinal, _)| {
                record
                    .field(*ordinal)
                    .is_some_and(|value| !value.is_nil())
            })
            .collect()
    }
}

#[derive(Debug, Default)]
struct State {
    plans: HashMap<CacheKey, Arc<Plan>>,
    columns: HashMap<TypeId, Arc<Columns>>,
}

/// Compiled statement plans, shared by every caller holding the same
/// `Arc<PlanCache>`.
///
/// One lock guards both maps. Lookups take the read lock; `store`,
/// `reset`, and the first column lookup of a type take the write lock.
/// Concurrent misses on one key may both compile; the last store wins.
#[derive(Debug, Default)]
pub struct PlanCache {
    state: RwLock<State>,
}

impl PlanCache {
    pub fn new() -> PlanCache {
        PlanCache::default()
    }

    /// Builds the key for running `operation` over `record` with the given
    /// field subset.
    pub fn key<R: Record>(
        &self,
        flavor: Flavor,
        operation: Operation,
        record: &R,
        subset: Subset,
    ) -> CacheKey {
        let columns = self.columns(record);

        CacheKey {
            operation,
            table: record.table(),
            record: TypeId::of::<R>(),
            flavor,
            subset,
            present: columns.presence(record),
        }
    }

    pub fn lookup(&self, key: &CacheKey) -> Option<Arc<Plan>> {
        let plan = self.read().plans.get(key).cloned();

        match &plan {
            Some(_) => debug!(table = key.table, operation = ?key.operation, "plan cache hit"),
            None => debug!(table = key.table, operation = ?key.operation, "plan cache miss"),
        }

        plan
    }

    pub fn store(&self, key: CacheKey, plan: Plan) -> Arc<Plan> {
        let plan = Arc::new(plan);
        self.write().plans.insert(key, plan.clone());
        plan
    }

    /// Drops every plan. Column entries survive since they only depend on
    /// the record types.
    pub fn reset(&self) {
        self.write().plans.clear();
    }

    /// Number of stored plans.
    pub fn len(&self) -> usize {
        self.read().plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the column entry of `R`, computing it on first use.
    pub fn columns<R: Record>(&self, record: &R) -> Arc<Columns> {
        let type_id = TypeId::of::<R>();

        if let Some(columns) = self.read().columns.get(&type_id) {
            return columns.clone();
        }

        let columns = Arc::new(Columns::new(record));
        self.write()
            .columns
            .entry(type_id)
            .or_insert(columns)
            .clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        // A panic while holding the lock cannot leave a map half-written.
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
