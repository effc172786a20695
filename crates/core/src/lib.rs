//! Core domain types, errors, and constants for the `adorn` workspace.
//!
//! This crate establishes the foundational data structures and error handling
//! mechanisms used by every other crate: the callable abstraction, the
//! argument bundle that flows through wrappers, and the shared error type.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   centralizing all possible failure modes for predictable error handling.
//! - **`types`**: Contains the callable abstraction (`Callable`, `Func`,
//!   `Signature`) and the argument bundle (`ArgBundle`) that wrappers
//!   forward unchanged.
//! - **`constants`**: A collection of shared, static constants such as
//!   environment variable names and report formatting widths.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
