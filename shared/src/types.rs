//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Table number, as printed on the table card
pub type MesaId = u32;
