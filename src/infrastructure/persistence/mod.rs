pub mod in_memory_store;
pub mod migrations;
pub mod redis_store;
pub mod sqlite_store;
