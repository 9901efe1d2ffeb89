//! decide-now: multi-level decision wheel for the terminal, hexagonal layout.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
