//! Storage adapters for the record store port.

mod file_record_store;
mod in_memory_record_store;

pub use file_record_store::FileRecordStore;
pub use in_memory_record_store::InMemoryRecordStore;
