mod builder;
pub use builder::Builder;

use crate::{
    engine::{Engine, PlanCache, Statement},
    exec, Result,
};

use modelmap_core::{Connection, FieldId, Flavor, Record};
use modelmap_sql::{stmt::CreateTable, Serializer};

use std::sync::Arc;

/// A connection paired with the engine compiling statements for it.
///
/// Every `Db` built from the same [`PlanCache`] shares compiled plans.
pub struct Db {
    engine: Engine,
    connection: Box<dyn Connection>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects with a private plan cache.
    pub fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn plan_cache(&self) -> &Arc<PlanCache> {
        self.engine.plan_cache()
    }

    pub fn flavor(&self) -> Flavor {
        self.engine.flavor()
    }

    pub fn connection(&mut self) -> &mut dyn Connection {
        &mut *self.connection
    }

    /// Loads the row identified by the record's keys into the record.
    pub fn load<R: Record>(&mut self, record: &mut R) -> Result<()> {
        self.engine.load(&mut *self.connection, record)
    }

    /// Inserts the record, reading back store-assigned columns.
    pub fn create<R: Record>(&mut self, record: &mut R) -> Result<()> {
        self.engine.create(&mut *self.connection, record)
    }

    pub fn create_fields<R: Record>(&mut self, record: &mut R, fields: &[FieldId]) -> Result<()> {
        self.engine
            .create_fields(&mut *self.connection, record, fields)
    }

    pub fn update<R: Record>(&mut self, record: &mut R) -> Result<()> {
        self.engine.update(&mut *self.connection, record)
    }

    pub fn update_fields<R: Record>(&mut self, record: &mut R, fields: &[FieldId]) -> Result<()> {
        self.engine
            .update_fields(&mut *self.connection, record, fields)
    }

    pub fn delete<R: Record>(&mut self, record: &mut R) -> Result<()> {
        self.engine.delete(&mut *self.connection, record)
    }

    /// Inserts, updates, or upserts the record depending on its keys.
    pub fn save<R: Record>(&mut self, record: &mut R) -> Result<()> {
        self.engine.save(&mut *self.connection, record)
    }

    /// Runs an already bound statement on this connection.
    pub fn run(&mut self, stmt: Statement<'_>) -> Result<()> {
        exec::run(&mut *self.connection, stmt)
    }

    /// Creates a table from its definition.
    pub fn create_table(&mut self, table: &CreateTable) -> Result<()> {
        let mut params = Vec::<usize>::new();
        let sql = Serializer::new(self.flavor()).serialize(&table.clone().into(), &mut params);

        tracing::debug!(table = %table.name, "create table");
        self.connection.execute(&sql, &[])?;
        Ok(())
    }
}

impl core::fmt::Debug for Db {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Db")
            .field("flavor", &self.flavor())
            .field("plans", &self.plan_cache().len())
            .finish()
    }
}
