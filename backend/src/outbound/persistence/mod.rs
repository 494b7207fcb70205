//! PostgreSQL persistence adapters (Diesel, `diesel-async`, `bb8`).
//!
//! Row types and the table schema stay private to this module; only the pool
//! and port implementations are exported.

mod diesel_error_mapping;
mod diesel_uniqueness_oracle;
mod pool;
mod schema;

pub use diesel_uniqueness_oracle::DieselUniquenessOracle;
pub use pool::{DbPool, PoolConfig, PoolError};
