//! Callable and argument types for adorn

pub mod args;
pub mod callable;

pub use self::{
    args::{ArgBundle, Value},
    callable::{BoundArgs, Callable, Func, Param, Signature},
};
