//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `clean_path`)
//! - [`route`]: Reference resolution (`resolve_reference`, `relative_prefix`, `to_web_path`)

pub mod fs;
pub mod route;

pub use fs::{clean_path, normalize_path};
pub use route::{relative_prefix, resolve_reference, to_web_path};
