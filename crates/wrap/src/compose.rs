//! The generic wrap primitive: before → target → after

use std::sync::Arc;

use adorn_core::{ArgBundle, Callable, Result, Value, WRAPPER_NAME};
use tracing::debug;

/// Hook run before the target, with no access to the call's arguments
pub type BeforeHook = Box<dyn Fn() + Send + Sync>;

/// Hook run after the target, with the call's inputs and the return value
pub type AfterHook = Box<dyn Fn(&ArgBundle, &Value) + Send + Sync>;

/// Builder for a [`Wrapped`] callable.
///
/// The wrapper holds a shared reference to its target; the target outlives
/// any one wrapper and may be wrapped several times over. By default the
/// wrapper exposes the generic `"wrapper"` display name; the original name
/// is only carried over when `preserve_identity` is requested.
pub struct Wrap {
    target: Arc<dyn Callable>,
    before: Option<BeforeHook>,
    after: Option<AfterHook>,
    preserve_identity: bool,
}

impl Wrap {
    #[must_use]
    pub fn new(target: Arc<dyn Callable>) -> Self {
        Self {
            target,
            before: None,
            after: None,
            preserve_identity: false,
        }
    }

    /// Run `hook` before every call to the target
    #[must_use]
    pub fn before(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.before = Some(Box::new(hook));
        self
    }

    /// Run `hook` after every successful call, with inputs and return value
    #[must_use]
    pub fn after(mut self, hook: impl Fn(&ArgBundle, &Value) + Send + Sync + 'static) -> Self {
        self.after = Some(Box::new(hook));
        self
    }

    /// Copy the target's display name onto the wrapper
    #[must_use]
    pub fn preserve_identity(mut self) -> Self {
        self.preserve_identity = true;
        self
    }

    #[must_use]
    pub fn build(self) -> Wrapped {
        let display_name = if self.preserve_identity {
            self.target.display_name().to_string()
        } else {
            WRAPPER_NAME.to_string()
        };
        debug!(
            target_name = %self.target.display_name(),
            wrapper = %display_name,
            "wrapping callable"
        );
        Wrapped {
            target: self.target,
            before: self.before,
            after: self.after,
            display_name,
        }
    }
}

/// A callable substituted for its target.
///
/// Calling runs, in order: the `before` hook, the target with the exact
/// bundle passed in, then the `after` hook; the target's return value is
/// returned unchanged. A target failure propagates immediately and the
/// `after` hook never runs.
pub struct Wrapped {
    target: Arc<dyn Callable>,
    before: Option<BeforeHook>,
    after: Option<AfterHook>,
    display_name: String,
}

impl Callable for Wrapped {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn call(&self, args: &ArgBundle) -> Result<Value> {
        if let Some(before) = &self.before {
            before();
        }
        let value = self.target.call(args)?;
        if let Some(after) = &self.after {
            after(args, &value);
        }
        Ok(value)
    }
}

/// Start wrapping `target`
#[must_use]
pub fn wrap(target: Arc<dyn Callable>) -> Wrap {
    Wrap::new(target)
}
