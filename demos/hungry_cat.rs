//! Hungry Cat
//!
//! This example walks a tiny machine through events, then steps back and
//! forth with undo and redo.
//!
//! Key concepts:
//! - Declaring a configuration with `machine_config!`
//! - Firing events and handling rejected ones
//! - One-level undo and redo
//!
//! Run with: cargo run --example hungry_cat

use waypoint::{machine_config, FiniteStateMachine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Hungry Cat Example ===\n");

    let config = machine_config! {
        initial: hungry,
        hungry { eat => full },
        full { rest => sleeping, play => hungry },
        sleeping { wake => hungry },
    }?;

    let mut cat = FiniteStateMachine::new(config)?;
    println!("Initial state: {}", cat.current_state());
    println!("Available events: {:?}", cat.available_events());

    cat.trigger("eat")?;
    cat.trigger("rest")?;
    println!("After eating and resting: {}", cat.current_state());

    if let Err(err) = cat.trigger("eat") {
        println!("Rejected: {err}");
    }

    println!("\nStates that react to 'wake': {:?}", cat.get_states(Some("wake")));

    println!("\nundo -> {} ({})", cat.undo(), cat.current_state());
    println!("undo -> {} ({})", cat.undo(), cat.current_state());
    println!("redo -> {} ({})", cat.redo(), cat.current_state());
    println!("redo -> {} ({})", cat.redo(), cat.current_state());

    cat.reset();
    println!("\nAfter reset: {}", cat.current_state());

    println!("\n=== Example Complete ===");
    Ok(())
}
