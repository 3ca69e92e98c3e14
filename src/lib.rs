//! dbcat - catalogs for tag-annotated content trees
//!
//! A content tree is a directory hierarchy in which every folder lists its
//! children in `folders.json` / `files.json`. Each entry's label carries
//! inline tags (`name:hidden2:cyan`) that grade how hidden or locked it is
//! and how it is themed. This library parses those labels, builds a nested
//! manifest of the whole tree, and drives an access-gated navigator and an
//! exact-match search over it.

use thiserror::Error;

pub mod access;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod manifest;
pub mod navigator;
pub mod output;
pub mod search;
pub mod source;
pub mod tags;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum DbcatError {
    /// Manifest build error
    #[error(transparent)]
    Manifest(#[from] manifest::ManifestError),
    /// Catalog source error
    #[error("Catalog error: {0}")]
    Source(#[from] source::SourceError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Interactive prompt failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
