//! Persistence layer. The profile is one JSON value in a libSQL settings
//! table.

pub mod libsql_backend;
pub mod traits;

pub use libsql_backend::LibSqlBackend;
pub use traits::Database;
