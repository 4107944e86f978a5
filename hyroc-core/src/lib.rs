//! Shared primitives for the hyroc ROC analysis crates.
//!
//! `hyroc-core` provides the foundation the other hyroc crates build on:
//!
//! - **Error types** — [`HyrocError`] and [`Result`] for structured error handling
//! - **Traits** — Core abstractions like [`Scored`], [`Annotated`], [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{HyrocError, InputKind, Result};
pub use traits::*;
