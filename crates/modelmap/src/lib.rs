mod columns;
pub use columns::{columns_of, values_of};

pub mod db;
pub use db::Db;

mod driver;

pub mod engine;
pub use engine::{Engine, Operation, Plan, PlanCache, Scenario, Statement, Subset};

pub mod exec;

pub use modelmap_core::{
    bail, err,
    schema::{self, FieldTag, Meta},
    stmt::{self, FieldValue, Type, Value},
    Connection, Error, FieldId, Flavor, Record, Result,
};

pub use modelmap_macros::Record;

pub use modelmap_sql as sql;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{FieldId, FieldValue, Record};
    pub use std::option::Option;
}
