//! Cache module - the entry file protocol
//!
//! Provides:
//! - `FileCache` store (path resolution, text I/O, exists/delete/clear)
//! - JSON codecs for the structured payload encodings

pub mod codec;
pub mod store;
