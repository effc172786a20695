use std::sync::Arc;

use adorn_core::{ArgBundle, Callable, Func, Param, Signature, Value};
use adorn_wrap::{make_greeter, reverse_input};

/// A plain print callable taking one text argument
fn print_fn() -> Arc<dyn Callable> {
    Arc::new(Func::new(
        "print",
        Signature::new(vec![Param::required("text")]),
        |bound| {
            println!("{}", bound.as_str("text").unwrap_or_default());
            Ok(Value::Null)
        },
    ))
}

/// Greeters with captured prefixes, then the same greeters behind a
/// text-reversing wrapper.
pub fn execute() -> eyre::Result<()> {
    let print_debug = make_greeter("DEBUG :");
    print_debug.call(&ArgBundle::new().arg("shekhar"))?;

    let print_warning = make_greeter("Warning :");
    print_warning.call(&ArgBundle::new().arg("Opps!"))?;

    let rev_print = reverse_input(print_fn());
    rev_print.call(&ArgBundle::new().arg("Hello Shekhar!"))?;

    let rev_warning = reverse_input(Arc::new(make_greeter("Warning :")));
    rev_warning.call(&ArgBundle::new().arg("Shekhar!"))?;

    Ok(())
}
