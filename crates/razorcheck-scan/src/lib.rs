//! Filesystem side of the policy check: enumerate candidate files and test
//! them for the forbidden marker.

pub mod matcher;
pub mod walker;

pub use matcher::contains_marker;
pub use walker::scan_files;
