//! The callable abstraction: signatures, binding, and named functions

use std::fmt;

use indexmap::IndexMap;

use super::args::{ArgBundle, Value};
use crate::errors::{Error, Result};

/// A single parameter in a callable's signature, with an optional default
#[derive(Debug, Clone)]
pub struct Param {
    name: String,
    default: Option<Value>,
}

impl Param {
    /// A parameter that must be supplied on every call
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// A parameter that falls back to `default` when not supplied
    #[must_use]
    pub fn with_default(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    /// The parameter name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A callable's parameter list, fixed at definition time.
///
/// Binding resolves an `ArgBundle` against this list: positional arguments
/// map onto parameters in order, named arguments by name, and remaining
/// parameters fall back to their defaults. Arguments are never silently
/// dropped; every mismatch is a typed error.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    /// Create a signature from an ordered parameter list
    #[must_use]
    pub fn new(params: Vec<Param>) -> Self {
        Self { params }
    }

    /// A signature taking no arguments
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The parameters, in declaration order
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Resolve `args` against this signature.
    ///
    /// `callable` is the display name used in error messages.
    pub fn bind(&self, callable: &str, args: &ArgBundle) -> Result<BoundArgs> {
        if args.positional().len() > self.params.len() {
            return Err(Error::TooManyArguments {
                callable: callable.to_string(),
                expected: self.params.len(),
                given: args.positional().len(),
            });
        }

        let mut bound: IndexMap<String, Value> = IndexMap::new();
        for (param, value) in self.params.iter().zip(args.positional()) {
            bound.insert(param.name.clone(), value.clone());
        }

        for (name, value) in args.named() {
            if !self.params.iter().any(|p| p.name == *name) {
                return Err(Error::UnknownArgument {
                    callable: callable.to_string(),
                    name: name.clone(),
                });
            }
            if bound.contains_key(name) {
                return Err(Error::DuplicateArgument {
                    callable: callable.to_string(),
                    name: name.clone(),
                });
            }
            bound.insert(name.clone(), value.clone());
        }

        for param in &self.params {
            if !bound.contains_key(&param.name) {
                match &param.default {
                    Some(default) => {
                        bound.insert(param.name.clone(), default.clone());
                    }
                    None => {
                        return Err(Error::MissingArgument {
                            callable: callable.to_string(),
                            name: param.name.clone(),
                        });
                    }
                }
            }
        }

        Ok(BoundArgs(bound))
    }
}

/// Arguments resolved against a signature, keyed by parameter name
#[derive(Debug, Clone)]
pub struct BoundArgs(IndexMap<String, Value>);

impl BoundArgs {
    /// Look up a bound value by parameter name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Look up a bound string value by parameter name
    #[must_use]
    pub fn as_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Look up a bound integer value by parameter name
    #[must_use]
    pub fn as_i64(&self, name: &str) -> Option<i64> {
        self.0.get(name).and_then(Value::as_i64)
    }
}

/// A named, invocable unit taking an argument bundle and returning one value.
///
/// Implemented by `Func` and by every wrapper type. Wrappers hold their
/// target behind `Arc<dyn Callable>`: the target's lifetime is independent
/// of any single wrapper and may be shared among several.
pub trait Callable: Send + Sync {
    /// Human-readable name used for display and logging
    fn display_name(&self) -> &str;

    /// Invoke with the given argument bundle
    fn call(&self, args: &ArgBundle) -> Result<Value>;
}

type Body = Box<dyn Fn(&BoundArgs) -> Result<Value> + Send + Sync>;

/// A named function: a signature plus a body closure.
///
/// Calling binds the bundle against the signature first, so the body only
/// ever sees fully resolved arguments.
pub struct Func {
    name: String,
    signature: Signature,
    body: Body,
}

impl Func {
    pub fn new(
        name: impl Into<String>,
        signature: Signature,
        body: impl Fn(&BoundArgs) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            signature,
            body: Box::new(body),
        }
    }
}

impl Callable for Func {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn call(&self, args: &ArgBundle) -> Result<Value> {
        let bound = self.signature.bind(&self.name, args)?;
        (self.body)(&bound)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Func")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greet_signature() -> Signature {
        Signature::new(vec![Param::with_default("name", "Shekhar")])
    }

    #[test]
    fn bind_fills_defaults() {
        let bound = greet_signature().bind("greet", &ArgBundle::new()).unwrap();
        assert_eq!(bound.as_str("name"), Some("Shekhar"));
    }

    #[test]
    fn bind_prefers_positional_over_default() {
        let args = ArgBundle::new().arg("joey");
        let bound = greet_signature().bind("greet", &args).unwrap();
        assert_eq!(bound.as_str("name"), Some("joey"));
    }

    #[test]
    fn bind_accepts_named_arguments() {
        let args = ArgBundle::new().named_arg("name", "joey");
        let bound = greet_signature().bind("greet", &args).unwrap();
        assert_eq!(bound.as_str("name"), Some("joey"));
    }

    #[test]
    fn bind_rejects_excess_positional() {
        let args = ArgBundle::new().arg("a").arg("b");
        let err = greet_signature().bind("greet", &args).unwrap_err();
        assert!(matches!(err, Error::TooManyArguments { given: 2, .. }));
    }

    #[test]
    fn bind_rejects_unknown_named() {
        let args = ArgBundle::new().named_arg("color", "red");
        let err = greet_signature().bind("greet", &args).unwrap_err();
        assert!(matches!(err, Error::UnknownArgument { .. }));
    }

    #[test]
    fn bind_rejects_positional_and_named_collision() {
        let args = ArgBundle::new().arg("joey").named_arg("name", "shekhar");
        let err = greet_signature().bind("greet", &args).unwrap_err();
        assert!(matches!(err, Error::DuplicateArgument { .. }));
    }

    #[test]
    fn bind_requires_parameters_without_defaults() {
        let signature = Signature::new(vec![Param::required("text")]);
        let err = signature.bind("print", &ArgBundle::new()).unwrap_err();
        assert!(matches!(err, Error::MissingArgument { .. }));
    }

    #[test]
    fn func_binds_then_runs_body() {
        let double = Func::new(
            "double",
            Signature::new(vec![Param::required("number")]),
            |bound| {
                let number = bound.as_i64("number").ok_or_else(|| Error::ArgumentType {
                    callable: "double".to_string(),
                    name: "number".to_string(),
                    expected: "an integer",
                })?;
                Ok(Value::from(number * 2))
            },
        );

        let result = double.call(&ArgBundle::new().arg(21)).unwrap();
        assert_eq!(result, Value::from(42));
        assert_eq!(double.display_name(), "double");
    }
}
