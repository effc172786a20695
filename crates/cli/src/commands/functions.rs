use std::sync::Arc;

use adorn_core::{ArgBundle, Callable, Error, Func, Param, Signature, Value};

fn arithmetic(name: &'static str, op: fn(i64) -> i64) -> Arc<dyn Callable> {
    Arc::new(Func::new(
        name,
        Signature::new(vec![Param::required("number")]),
        move |bound| {
            let number = bound.as_i64("number").ok_or_else(|| Error::ArgumentType {
                callable: name.to_string(),
                name: "number".to_string(),
                expected: "an integer",
            })?;
            Ok(Value::from(op(number)))
        },
    ))
}

/// Functions are values: call them directly, then through a list.
pub fn execute() -> eyre::Result<()> {
    let add_one = arithmetic("add_one", |n| n + 1);
    let multiply_10 = arithmetic("multiply_10", |n| n * 10);

    println!("{}", add_one.call(&ArgBundle::new().arg(10))?);
    println!("{}", multiply_10.call(&ArgBundle::new().arg(10))?);

    let function_list = [add_one, multiply_10];
    println!("{}", function_list[0].call(&ArgBundle::new().arg(10))?);
    println!("{}", function_list[1].call(&ArgBundle::new().arg(10))?);

    Ok(())
}
