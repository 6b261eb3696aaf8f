//! Key-value persistence slots for the storefront cart.
//!
//! Provides a small, typed API over a byte-slot store, with automatic JSON
//! serialization. Two backends ship with the crate: an in-memory map for
//! tests and a directory of files for anything that must survive a restart.
//!
//! # Example
//!
//! ```rust,ignore
//! use cart_cache::Cache;
//!
//! let mut cache = Cache::open_dir(".cart")?;
//!
//! // Store a value
//! cache.set("cart", &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<LineItem>> = cache.get("cart")?;
//!
//! // Delete a value
//! cache.delete("cart")?;
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Backend, Cache, CacheError, FileBackend, MemoryBackend};
}
