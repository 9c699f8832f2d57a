//! Assorted utility functions (missing batteries).
mod std_ext;

pub(crate) mod url;
pub(crate) mod viewer;

pub use std_ext::ErrorExt;

pub type DynError = dyn std::error::Error + Send + Sync;
