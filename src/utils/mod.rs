//! Utility modules shared by the bundler.

pub mod path;
pub mod plural;
pub mod walk;

pub use plural::plural_count;
