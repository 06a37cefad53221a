use anyhow::Result;
use restate_core::prelude::*;

fn counter(pass: &mut Pass<'_>) -> (i32, SetState<i32>, String) {
    let (count, set_count) = pass.use_state(|| 0);
    let (label, _set_label) = pass.use_state(|| "clicks".to_string());
    (count, set_count, label)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut instance = Instance::new();

    let (count, set_count, label) = instance.render(counter);
    log::info!("mounted with {} hook slots", instance.hook_count());
    println!("{count} {label}");

    // Three "clicks" land before the next frame; they fold in order.
    set_count.dispatch(|n| n + 1);
    set_count.dispatch(|n| n + 1);
    set_count.dispatch(|n| n * 10);

    while let Some((count, _, label)) = instance.render_if_needed(counter) {
        println!("{count} {label}");
    }

    Ok(())
}
