//! Scoped access to the contents of an exported bundle.
//!
//! [`mount`] exposes an archive as a readable directory tree and returns a
//! [`MountedArchive`] guard; the tree stays available until the guard is
//! dropped, which also releases it (detaching disk images, deleting
//! extracted files) on early returns and panics.

mod extract;
mod mount;
mod types;

pub use mount::{mount, MountedArchive};
pub use types::ArchiveFormat;

#[cfg(test)]
#[path = "tests/archive_tests.rs"]
mod tests;
