//! In-memory backend for the shelter store.
//!
//! State lives for the lifetime of the process and is lost on shutdown.
//! Every mutation is serialised behind a single lock; the roster, incident
//! log and capacity are published through `tokio::sync::watch` feeds once
//! the lock is released.

mod state;
mod store;

pub use store::MemoryStore;
