//! # Repository Layer
//!
//! Data access objects for each entity type. Each repository holds a
//! clone of the connection pool (cheap, reference-counted) and exposes
//! async CRUD methods returning `DbResult`.
//!
//! The stock ledger lives here too: it is the only writer of
//! `products.current_stock` and `stock_history`.

pub mod business;
pub mod product;
pub mod stock;

#[cfg(test)]
pub(crate) mod test_util {
    use crate::pool::{Database, DbConfig};

    /// Fresh in-memory database with migrations applied.
    pub async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }
}
