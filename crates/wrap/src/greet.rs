//! A parameterized closure: a greeter with a captured prefix

use adorn_core::{ArgBundle, Callable, Error, Param, Result, Signature, Value};

/// A greeting callable whose prefix is captured once at construction.
///
/// The captured state is immutable; every call reuses the same prefix.
/// Independent greeters built from different prefixes share nothing.
pub struct Greeter {
    prefix: String,
    signature: Signature,
}

impl Greeter {
    fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            signature: Signature::new(vec![Param::required("name")]),
        }
    }

    /// Format the greeting for `name` without printing it
    #[must_use]
    pub fn greeting(&self, name: &str) -> String {
        format!("{} Hello, {}!", self.prefix, name)
    }
}

impl Callable for Greeter {
    fn display_name(&self) -> &str {
        "hello"
    }

    fn call(&self, args: &ArgBundle) -> Result<Value> {
        let bound = self.signature.bind(self.display_name(), args)?;
        let name = bound.as_str("name").ok_or_else(|| Error::ArgumentType {
            callable: self.display_name().to_string(),
            name: "name".to_string(),
            expected: "a string",
        })?;
        println!("{}", self.greeting(name));
        Ok(Value::Null)
    }
}

/// Build a greeter that owns `prefix` as its closure state
#[must_use]
pub fn make_greeter(prefix: impl Into<String>) -> Greeter {
    Greeter::new(prefix)
}
