//! Callable wrapping for the `adorn` workspace.
//!
//! Given a target callable, each module here produces a replacement callable
//! that adds behavior around the original call and substitutes for it
//! transparently: the wrapper forwards the argument bundle unchanged, never
//! catches the target's errors, and keeps its own closure state immutable
//! after construction.
//!
//! ## Key Components
//!
//! - **`compose`**: the generic wrap primitive with `before`/`after` hooks.
//! - **`greet`**: a parameterized closure capturing a prefix at build time.
//! - **`reverse`**: an input-transforming wrapper reversing its text argument.
//! - **`repeat`**: repeated independent invocation, results in call order.
//! - **`measure`**: wall-clock and heap measurement with an identity-preserving
//!   wrapper and a fixed-layout report.
//! - **`alloc`**: the tracking allocator and scoped session behind `measure`.

pub mod alloc;
pub mod compose;
pub mod greet;
pub mod measure;
pub mod repeat;
pub mod reverse;

pub use alloc::{MemorySample, TraceSession, TrackingAllocator};
pub use compose::{wrap, Wrap, Wrapped};
pub use greet::{make_greeter, Greeter};
pub use measure::{measure, Measured, PerfReport};
pub use repeat::{repeat, Repeated};
pub use reverse::{reverse_input, Reversed};
