//! # plexus-store
//!
//! In-memory reference implementation of [`IEntityStore`]: a brute-force
//! vector index, a forward adjacency list with bounded BFS expansion, and
//! idempotent similarity-edge upsert keyed by the unordered id pair.
//! Integration tests run against it; it is also the executable
//! documentation of the store contract.
//!
//! [`IEntityStore`]: plexus_core::traits::IEntityStore

mod memory_store;

pub use memory_store::MemoryStore;
