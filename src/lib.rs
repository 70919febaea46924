//! flatcache - a best-effort flat-file cache
//!
//! Each named entry is one UTF-8 file at `<root>/files/CacheUtils/<name>.txt`.
//! On top of the raw text, three JSON payload encodings are available:
//! - record lists: a JSON array of string-keyed objects
//! - single records: one string-keyed JSON object
//! - arbitrary serde values, with the type parameter as the stored shape
//!
//! The cache is an acceleration layer, not a source of truth: every failure
//! (missing entry, I/O error, malformed JSON) degrades to an empty or absent
//! result, writes and deletes are best-effort, and diagnostics surface only
//! through `tracing` debug output. Callers must treat any miss as "recompute
//! and optionally rewrite".

mod cache;
mod core;

pub use cache::store::FileCache;
