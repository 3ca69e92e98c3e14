//! Exact-match file search
//!
//! The catalog tree is flattened once into a [`SearchIndex`]: a depth-first,
//! files-before-folders list of every file with its slash-joined path. A
//! query matches a file when it equals the file's base name (extension
//! removed) ignoring case. Substrings and prefixes never match.
//!
//! [`LazyIndex`] holds the index for a session. It can be pre-warmed from a
//! background task; a search arriving before the warm-up finishes waits for
//! that same build instead of starting another.

pub mod index;
pub mod lazy;

pub use index::{SearchIndex, SearchIndexEntry};
pub use lazy::LazyIndex;
