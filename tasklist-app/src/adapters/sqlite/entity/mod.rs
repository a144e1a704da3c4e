//! `SeaORM` entities for `SqliteStore`.

pub mod task;
