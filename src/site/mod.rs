//! Static site resources
//!
//! This module maps request paths to page lookup keys and fetches page
//! content from a pluggable store.

pub mod resolver;
pub mod store;

pub use resolver::resolve;
pub use store::{DirSite, MemorySite, Site};
