//! # Savefile Core Kernel
//!
//! Crate-wide plumbing shared by every subsystem.
//!
//! - **Core Constants**: application name, default directory location and the
//!   environment variable that overrides it, via the `constants` submodule.
//! - **Error Handling**: the crate-wide [`Error`](error::Error) type and a
//!   `Result` alias in the `error` submodule. Subsystem errors such as
//!   [`StorageSystemError`](crate::storage::error::StorageSystemError) convert
//!   into it with `?`.
pub mod constants;
pub mod error;

pub use error::{Error, Result};
