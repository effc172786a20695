//! Environment-file loading for the `adorn` workspace.
//!
//! Reads `KEY=VALUE` files into an explicit [`EnvMap`] that callers pass to
//! consumers, rather than mutating ambient process state behind the scenes.
//! Writing into the process environment is a separate, deliberate step with
//! an explicit override policy.

pub mod expand;
pub mod loader;
pub mod map;
pub mod parse;

pub use expand::expand;
pub use loader::Loader;
pub use map::EnvMap;
pub use parse::{parse_file, parse_str};
