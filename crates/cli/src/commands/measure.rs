use std::sync::Arc;

use adorn_core::{ArgBundle, Callable, Func, Signature, Value};
use adorn_wrap::measure;

const LIST_LEN: u32 = 1_000_000;

fn function1() -> Arc<dyn Callable> {
    Arc::new(Func::new("function1", Signature::empty(), |_| {
        let mut list = Vec::new();
        for a in 0..LIST_LEN {
            if a % 2 == 0 {
                list.push(1u8);
            } else {
                list.push(0u8);
            }
        }
        Ok(Value::from(list.len() as u64))
    }))
}

fn function2() -> Arc<dyn Callable> {
    Arc::new(Func::new("function2", Signature::empty(), |_| {
        let list: Vec<u8> = (0..LIST_LEN).map(|a| u8::from(a % 2 == 0)).collect();
        Ok(Value::from(list.len() as u64))
    }))
}

/// Measure two list-building strategies; each report names the original
/// function, not the wrapper.
pub fn execute() -> eyre::Result<()> {
    measure(function1()).call(&ArgBundle::new())?;
    measure(function2()).call(&ArgBundle::new())?;
    Ok(())
}
