use super::Db;
use crate::{driver, engine::Engine, engine::PlanCache, Result};

use modelmap_core::Connection;

use std::sync::Arc;

/// Configures a [`Db`].
#[derive(Debug, Default)]
pub struct Builder {
    /// Plan cache to share. A fresh one is created when unset.
    plans: Option<Arc<PlanCache>>,
}

impl Builder {
    /// Shares `plans` with the built `Db`.
    pub fn plan_cache(&mut self, plans: Arc<PlanCache>) -> &mut Self {
        self.plans = Some(plans);
        self
    }

    /// Connects to the store named by `url`. Supported schemes are
    /// `postgresql` and `sqlite`, each behind the cargo feature of the same
    /// name.
    pub fn connect(&self, url: &str) -> Result<Db> {
        let connection = driver::connect(url)?;
        Ok(self.build(connection))
    }

    /// Builds a `Db` over an existing connection.
    pub fn build(&self, connection: impl Connection + 'static) -> Db {
        let plans = self.plans.clone().unwrap_or_default();
        let engine = Engine::with_plan_cache(connection.flavor(), plans);

        Db {
            engine,
            connection: Box::new(connection),
        }
    }
}
