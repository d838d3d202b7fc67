//! Content loaders for reading ghost data from files.
//!
//! Every loader offers `load(path)` for files on disk, `parse(text)` for
//! in-memory data, and `embedded()` for the copy compiled into the crate.

pub mod config;
pub mod factory;
pub mod names;
pub mod spells;
pub mod tables;

pub use config::ConfigLoader;
pub use factory::{ContentFactory, GhostContent};
pub use names::{LoreLoader, NameLoader};
pub use spells::SpellLoader;
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
