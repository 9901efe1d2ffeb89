//! Infrastructure adapters. Implement the ports.
//!
//! In-memory store, seed file loading, terminal UI. Map errors to DomainError.

pub mod memory;
pub mod ui;
