//! Application handlers.
//!
//! Each handler orchestrates one use case: it loads state through ports,
//! applies domain logic, persists the result, and emits outbound messages.

mod advance_turn;

pub use advance_turn::{AdvanceTurnCommand, AdvanceTurnError, AdvanceTurnHandler, TurnOutcome};
