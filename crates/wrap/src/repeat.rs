//! A repeating wrapper: call the target n times, collect the results

use std::sync::Arc;

use adorn_core::{ArgBundle, Callable, Error, Result, Value, WRAPPER_NAME};
use tracing::debug;

/// Wrapper invoking its zero-argument target a fixed number of times.
///
/// Each invocation is independent; results are never cached or reused, so a
/// non-deterministic target is sampled afresh every time. The collected
/// results come back as an array in call order.
pub struct Repeated {
    target: Arc<dyn Callable>,
    count: usize,
}

impl std::fmt::Debug for Repeated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repeated")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl Callable for Repeated {
    fn display_name(&self) -> &str {
        WRAPPER_NAME
    }

    fn call(&self, args: &ArgBundle) -> Result<Value> {
        if !args.is_empty() {
            return Err(Error::TooManyArguments {
                callable: self.display_name().to_string(),
                expected: 0,
                given: args.len(),
            });
        }

        let mut results = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            results.push(self.target.call(&ArgBundle::new())?);
        }
        Ok(Value::Array(results))
    }
}

/// Wrap `target` so one call produces `count` independent invocations.
///
/// `count` must be at least 1.
pub fn repeat(target: Arc<dyn Callable>, count: usize) -> Result<Repeated> {
    if count == 0 {
        return Err(Error::InvalidRepeatCount { given: count });
    }
    debug!(target_name = %target.display_name(), count, "adding repeat wrapper");
    Ok(Repeated { target, count })
}
