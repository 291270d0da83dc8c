// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer: path resolution, typed caches and loaded documents.

pub mod cache;
pub mod document;
pub mod resolver;

// Re-export commonly used types
pub use cache::TypedCache;
pub use document::{CacheStats, ConfigDocument};
pub use resolver::resolve;
