use std::sync::Arc;

use adorn_core::{ArgBundle, Callable, Func, Signature, Value};
use adorn_wrap::repeat;
use rand::Rng;

fn roll_dice() -> Arc<dyn Callable> {
    Arc::new(Func::new("roll_dice", Signature::empty(), |_| {
        Ok(Value::from(rand::thread_rng().gen_range(1..=6)))
    }))
}

/// Three independent die rolls through a repeating wrapper.
pub fn execute() -> eyre::Result<()> {
    let roll_dice = roll_dice();
    println!("Adding decorator to {}", roll_dice.display_name());

    let roll_thrice = repeat(roll_dice, 3)?;
    let rolls = roll_thrice.call(&ArgBundle::new())?;

    match rolls {
        Value::Array(values) => {
            let parts: Vec<String> = values.iter().map(Value::to_string).collect();
            println!("({})", parts.join(", "));
        }
        other => println!("{other}"),
    }

    Ok(())
}
