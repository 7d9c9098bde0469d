mod exec_log;
pub use exec_log::{ExecLog, Op, OpKind};

pub use logging_connection::LoggingConnection;

mod mock_connection;
pub use mock_connection::{MockConnection, Replies, Reply};

pub mod models;

pub use setup::{init_tracing, mock_db, sqlite_db};
