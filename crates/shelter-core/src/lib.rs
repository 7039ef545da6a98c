//! Core types and trait definitions for the shelter resident store.
//!
//! This crate holds the domain model (residents, incidents, occupancy) and
//! the [`store::ShelterStore`] abstraction. It performs no I/O; concrete
//! stores and presentation adapters live in sibling crates.

pub mod error;
pub mod incident;
pub mod occupancy;
pub mod resident;
pub mod store;

pub use error::{Rejection, Result};

/// Capacity used when nothing else has been configured.
pub const DEFAULT_CAPACITY: u32 = 20;
