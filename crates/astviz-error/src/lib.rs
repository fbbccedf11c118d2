//! # astviz-error
//!
//! Unified error handling for astviz.
//!
//! ## Design
//!
//! - **ErrorKind**: what went wrong (e.g. ConfigInvalid, ParseFailed, RenderFailed)
//! - **ErrorScope**: how far the failure reaches (the whole process, or one input file)
//! - **Error Context**: key/value pairs that locate the cause (file, key, command)
//! - **Error Source**: the wrapped underlying error, if any
//!
//! ## Usage
//!
//! ```rust
//! use astviz_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ParseFailed, "no method declaration found")
//!         .with_operation("java::dump_first_method")
//!         .with_context("file", "Snippet.java"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, astviz_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, callers further up only append context

mod error;
mod kind;
mod scope;

pub use error::Error;
pub use kind::ErrorKind;
pub use scope::ErrorScope;

/// Result type alias using astviz Error
pub type Result<T> = std::result::Result<T, Error>;
