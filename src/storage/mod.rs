// Storage - Persistence layer (RocksDB)
// Principe: Auditabilité, Reproductibilité

pub mod db;

pub use db::*;
