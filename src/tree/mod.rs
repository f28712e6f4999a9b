//! Directory scanning
//!
//! Walks the base directory, prunes ignored directory names and selects files
//! by extension or exact filename.

pub mod filter;
pub mod path;
pub mod walker;

pub use filter::FileFilter;
pub use walker::Walker;
