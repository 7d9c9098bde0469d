mod cache;
pub use cache::{CacheKey, Columns, Operation, PlanCache, Subset};

mod delete;
mod insert;
mod key;
mod load;

mod plan;
pub use plan::{Plan, Statement};

mod save;

mod scenario;
pub use scenario::Scenario;

mod update;

use crate::exec;

use modelmap_core::{Connection, Error, FieldId, Flavor, Meta, Record, Result};
use modelmap_sql::{self as sql, Serializer};

use std::sync::Arc;
use tracing::{debug, trace};

/// Compiles records into statements for one SQL flavor, memoizing every
/// compiled plan in a [`PlanCache`].
///
/// Cloning an engine shares its cache.
#[derive(Debug, Clone)]
pub struct Engine {
    serializer: Serializer,
    plans: Arc<PlanCache>,
}

impl Engine {
    pub fn new(flavor: Flavor) -> Engine {
        Engine::with_plan_cache(flavor, Arc::default())
    }

    pub fn with_plan_cache(flavor: Flavor, plans: Arc<PlanCache>) -> Engine {
        Engine {
            serializer: Serializer::new(flavor),
            plans,
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.serializer.flavor()
    }

    pub fn plan_cache(&self) -> &Arc<PlanCache> {
        &self.plans
    }

    /// Statement loading the row identified by the record's keys.
    pub fn load_statement<'r, R: Record>(&self, record: &'r mut R) -> Option<Statement<'r>> {
        self.statement(Operation::Load, record, Subset::Full)
    }

    /// Statement inserting the record. An empty `fields` list writes every
    /// field.
    pub fn insert_statement<'r, R: Record>(
        &self,
        record: &'r mut R,
        fields: &[FieldId],
    ) -> Option<Statement<'r>> {
        self.statement(Operation::Create, record, subset(fields))
    }

    /// Statement updating the record. An empty `fields` list assigns every
    /// field.
    pub fn update_statement<'r, R: Record>(
        &self,
        record: &'r mut R,
        fields: &[FieldId],
    ) -> Option<Statement<'r>> {
        self.statement(Operation::Update, record, subset(fields))
    }

    pub fn delete_statement<'r, R: Record>(&self, record: &'r mut R) -> Option<Statement<'r>> {
        self.statement(Operation::Delete, record, Subset::Full)
    }

    /// Statement saving the record: an insert, update, or upsert depending
    /// on its keys.
    pub fn save_statement<'r, R: Record>(&self, record: &'r mut R) -> Option<Statement<'r>> {
        let columns = self.plans.columns(record);
        let present = columns.presence(record);

        let scenario = Scenario::from_keys(
            columns
                .keys
                .iter()
                .zip(present)
                .map(|((_, tag), present)| (*tag, present)),
        );

        debug!(table = record.table(), ?scenario, "save scenario");

        let operation = match scenario {
            Some(Scenario::Update) => Operation::Update,
            Some(Scenario::Upsert) => Operation::Save,
            Some(Scenario::Insert) | None => Operation::Create,
        };

        self.statement(operation, record, Subset::Full)
    }

    pub fn load<R: Record>(&self, conn: &mut dyn Connection, record: &mut R) -> Result<()> {
        self.check_flavor(conn)?;
        let stmt = self
            .load_statement(record)
            .ok_or_else(|| Error::invalid_statement("nothing to load"))?;
        exec::run(conn, stmt)
    }

    pub fn create<R: Record>(&self, conn: &mut dyn Connection, record: &mut R) -> Result<()> {
        self.create_fields(conn, record, &[])
    }

    pub fn create_fields<R: Record>(
        &self,
        conn: &mut dyn Connection,
        record: &mut R,
        fields: &[FieldId],
    ) -> Result<()> {
        self.check_flavor(conn)?;
        let stmt = self
            .insert_statement(record, fields)
            .ok_or_else(|| Error::invalid_statement("nothing to insert"))?;
        exec::run(conn, stmt)
    }

    pub fn update<R: Record>(&self, conn: &mut dyn Connection, record: &mut R) -> Result<()> {
        self.update_fields(conn, record, &[])
    }

    pub fn update_fields<R: Record>(
        &self,
        conn: &mut dyn Connection,
        record: &mut R,
        fields: &[FieldId],
    ) -> Result<()> {
        self.check_flavor(conn)?;
        let stmt = self
            .update_statement(record, fields)
            .ok_or_else(|| Error::invalid_statement("nothing to update"))?;
        exec::run(conn, stmt)
    }

    pub fn delete<R: Record>(&self, conn: &mut dyn Connection, record: &mut R) -> Result<()> {
        self.check_flavor(conn)?;
        let stmt = self
            .delete_statement(record)
            .ok_or_else(|| Error::invalid_statement("nothing to delete"))?;
        exec::run(conn, stmt)
    }

    pub fn save<R: Record>(&self, conn: &mut dyn Connection, record: &mut R) -> Result<()> {
        self.check_flavor(conn)?;
        let stmt = self
            .save_statement(record)
            .ok_or_else(|| Error::invalid_statement("nothing to save"))?;
        exec::run(conn, stmt)
    }

    /// Statements are compiled for one flavor; running them on a store of
    /// another flavor would bind the wrong placeholders.
    fn check_flavor(&self, conn: &dyn Connection) -> Result<()> {
        if conn.flavor() == self.flavor() {
            return Ok(());
        }

        Err(Error::invalid_statement(format!(
            "engine compiles {:?} statements but the connection is {:?}",
            self.flavor(),
            conn.flavor()
        )))
    }

    fn statement<'r, R: Record>(
        &self,
        operation: Operation,
        record: &'r mut R,
        subset: Subset,
    ) -> Option<Statement<'r>> {
        let key = self
            .plans
            .key(self.flavor(), operation, &*record, subset);

        let plan = match self.plans.lookup(&key) {
            Some(plan) => plan,
            None => {
                let plan = self.compile(operation, &*record, key.subset())?;
                trace!(table = plan.table(), sql = plan.sql(), "compiled plan");
                self.plans.store(key, plan)
            }
        };

        Some(Statement::new(plan, record))
    }

    fn compile(&self, operation: Operation, record: &dyn Record, subset: &Subset) -> Option<Plan> {
        let meta = Meta::extract(record);

        let stmt: sql::Statement = match operation {
            Operation::Load => load::build(&meta)?,
            Operation::Create => insert::build(&meta, subset)?,
            Operation::Update => update::build(&meta, subset)?,
            Operation::Delete => delete::build(&meta)?,
            Operation::Save => save::build_upsert(&meta)?,
        };

        Some(Plan::new(&self.serializer, meta.table(), &stmt))
    }
}

fn subset(fields: &[FieldId]) -> Subset {
    if fields.is_empty() {
        Subset::Full
    } else {
        Subset::of(fields)
    }
}
