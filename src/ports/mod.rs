//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the intake core and the outside world. Adapters implement these ports.
//!
//! - `RecordStore` - per-conversation persistence for intake records
//! - `Messenger` - outbound prompt and text delivery

mod messenger;
mod record_store;

pub use messenger::{Messenger, MessengerError};
pub use record_store::{RecordStore, RecordStoreError};
