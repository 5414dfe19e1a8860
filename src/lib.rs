//! Materializes the BusEase Flutter app's `lib/` skeleton on disk.
//!
//! The layout is a literal [`tree::DirectoryNode`] built in [`layout`]. The
//! [`materialize`] module walks it depth-first and creates each directory and
//! file, reporting and skipping anything that fails.
pub mod api;
pub mod errors;
pub mod layout;
pub mod materialize;
pub mod preview;
pub mod tree;

pub use api::{create_file_structure, default_root, preview_file_structure, ScaffoldError};
