/// Result type alias for adorn operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for adorn operations
///
/// Wrappers never construct or catch these on behalf of their target: a
/// failure raised inside a wrapped callable propagates unchanged through
/// every layer of wrapping.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// More positional arguments than the callable's signature accepts
    #[error("{callable}() takes {expected} positional argument(s) but {given} were given")]
    TooManyArguments {
        callable: String,
        expected: usize,
        given: usize,
    },

    /// A named argument that matches no parameter
    #[error("{callable}() got an unexpected named argument '{name}'")]
    UnknownArgument { callable: String, name: String },

    /// A parameter supplied both positionally and by name
    #[error("{callable}() got multiple values for argument '{name}'")]
    DuplicateArgument { callable: String, name: String },

    /// A required parameter with no default left unbound
    #[error("{callable}() missing required argument '{name}'")]
    MissingArgument { callable: String, name: String },

    /// An argument bound to a value of the wrong type
    #[error("{callable}() expected {expected} for argument '{name}'")]
    ArgumentType {
        callable: String,
        name: String,
        expected: &'static str,
    },

    /// Repeat wrappers require at least one invocation
    #[error("repeat count must be at least 1, got {given}")]
    InvalidRepeatCount { given: usize },

    /// A callable body failed for a reason of its own
    #[error("callable '{callable}' failed: {message}")]
    Callable { callable: String, message: String },
}
