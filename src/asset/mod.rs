//! Asset discovery, merging and bundling.
//!
//! ```text
//! collect ──► merge(discovered, included) ──► build (minify) ──► Bundle::write
//! ```

pub mod bundle;
mod collect;
mod filter;
mod kind;
mod map;
pub mod minify;

pub use bundle::{Bundle, merge};
pub use collect::{collect, load_included};
pub use filter::AssetFilter;
pub use kind::AssetClass;
pub use map::AssetMap;

pub(crate) use filter::{contains_any, has_extension, starts_with_any};
