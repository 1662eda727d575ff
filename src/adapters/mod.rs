//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the intake core to external systems:
//! - `storage` - record store backends (in-memory, file)
//! - `messaging` - messenger implementations (console, recording)

pub mod messaging;
pub mod storage;

pub use messaging::{ConsoleMessenger, RecordingMessenger, SentMessage};
pub use storage::{FileRecordStore, InMemoryRecordStore};
