//! Data model for a single organizer run.
//!
//! Files discovered during traversal are carried as [`FileEntry`] values;
//! nothing here outlives the run.
pub mod count;
pub mod file_entry;

pub use count::plural;
pub use file_entry::FileEntry;
