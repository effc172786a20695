use std::sync::Arc;

use adorn_core::{ArgBundle, Callable, Func, Param, Signature, Value};
use adorn_wrap::wrap;

fn greet() -> Arc<dyn Callable> {
    Arc::new(Func::new(
        "greet",
        Signature::new(vec![Param::with_default("name", "Shekhar")]),
        |bound| {
            println!("Hello {}", bound.as_str("name").unwrap_or_default());
            Ok(Value::Null)
        },
    ))
}

/// Before/After wrapping: the unwrapped call, the name contrast, and full
/// argument forwarding through the wrapper (defaults included).
pub fn execute() -> eyre::Result<()> {
    let greet = greet();
    greet.call(&ArgBundle::new().arg("Shekhar"))?;
    println!("{}", greet.display_name());

    let wrapped = wrap(greet)
        .before(|| println!("Before"))
        .after(|_, _| println!("After"))
        .build();

    wrapped.call(&ArgBundle::new().arg("Shekhar"))?;
    println!("{}", wrapped.display_name());

    // the wrapper does not know greet's parameter list; the target's own
    // default resolves
    wrapped.call(&ArgBundle::new())?;
    wrapped.call(&ArgBundle::new().named_arg("name", "joey"))?;

    Ok(())
}
