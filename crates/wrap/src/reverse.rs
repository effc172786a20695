//! An input-transforming wrapper: reverse the text, then call

use std::sync::Arc;

use adorn_core::{ArgBundle, Callable, Error, Result, Value, WRAPPER_NAME};

/// Wrapper that reverses its single text argument before forwarding.
///
/// The target sees the reversed text as its only positional argument;
/// everything else about the call is the target's own business.
pub struct Reversed {
    target: Arc<dyn Callable>,
}

impl Callable for Reversed {
    fn display_name(&self) -> &str {
        WRAPPER_NAME
    }

    fn call(&self, args: &ArgBundle) -> Result<Value> {
        if let Some((name, _)) = args.named().first() {
            return Err(Error::UnknownArgument {
                callable: self.display_name().to_string(),
                name: name.clone(),
            });
        }
        if args.positional().len() > 1 {
            return Err(Error::TooManyArguments {
                callable: self.display_name().to_string(),
                expected: 1,
                given: args.positional().len(),
            });
        }
        let text = args
            .positional()
            .first()
            .ok_or_else(|| Error::MissingArgument {
                callable: self.display_name().to_string(),
                name: "text".to_string(),
            })?
            .as_str()
            .ok_or_else(|| Error::ArgumentType {
                callable: self.display_name().to_string(),
                name: "text".to_string(),
                expected: "a string",
            })?;

        let reversed: String = text.chars().rev().collect();
        self.target.call(&ArgBundle::new().arg(reversed))
    }
}

/// Wrap `target` so each call receives its text argument reversed
#[must_use]
pub fn reverse_input(target: Arc<dyn Callable>) -> Reversed {
    Reversed { target }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adorn_core::{Func, Param, Signature};
    use std::sync::Mutex;

    fn capture_print(log: Arc<Mutex<Vec<String>>>) -> Arc<dyn Callable> {
        Arc::new(Func::new(
            "print",
            Signature::new(vec![Param::required("text")]),
            move |bound| {
                log.lock().unwrap().push(bound.as_str("text").unwrap_or_default().to_string());
                Ok(Value::Null)
            },
        ))
    }

    #[test]
    fn reverses_before_forwarding() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let rev_print = reverse_input(capture_print(Arc::clone(&log)));

        rev_print.call(&ArgBundle::new().arg("Hello!")).unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["!olleH"]);
    }

    #[test]
    fn wrapper_exposes_the_generic_name() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let rev_print = reverse_input(capture_print(log));
        assert_eq!(rev_print.display_name(), "wrapper");
    }

    #[test]
    fn non_string_argument_is_rejected() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let rev_print = reverse_input(capture_print(Arc::clone(&log)));

        let err = rev_print.call(&ArgBundle::new().arg(5)).unwrap_err();
        assert!(matches!(err, Error::ArgumentType { .. }));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_argument_is_rejected() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let rev_print = reverse_input(capture_print(log));

        let err = rev_print.call(&ArgBundle::new()).unwrap_err();
        assert!(matches!(err, Error::MissingArgument { .. }));
    }
}
