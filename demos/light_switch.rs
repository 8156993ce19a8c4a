//! Light Switch State Machine
//!
//! This example walks a two-state switch through transitions, undo/redo
//! and a reset.
//!
//! Key concepts:
//! - Declaring a state table with `state_table!`
//! - Event-driven transitions with `trigger`
//! - Navigating the visited-state history
//!
//! Run with: cargo run --example light_switch

use retrace::builder::BuildError;
use retrace::{state_table, MachineConfig, StateMachine};

fn print_status(machine: &StateMachine) {
    let history: Vec<&str> = machine.history().iter().map(|s| s.as_str()).collect();
    println!(
        "  state = {:<4} history = {:?} index = {}",
        machine.current_state().as_str(),
        history,
        machine.history_index()
    );
}

fn main() -> Result<(), BuildError> {
    println!("=== Light Switch State Machine ===\n");

    let states = state_table! {
        off => { turnOn => on },
        on => { turnOff => off },
    };
    let config = MachineConfig::new(states, "off");
    config.validate()?;

    let mut machine = StateMachine::new(config);
    println!("Initial state:");
    print_status(&machine);

    println!("\ntrigger(turnOn):");
    if let Err(err) = machine.trigger("turnOn") {
        println!("  failed: {err}");
    }
    print_status(&machine);

    println!("\ntrigger(turnOn) again:");
    if let Err(err) = machine.trigger("turnOn") {
        println!("  failed: {err}");
    }

    println!("\nundo: {}", machine.undo());
    print_status(&machine);
    println!("undo: {}", machine.undo());
    println!("redo: {}", machine.redo());
    print_status(&machine);

    println!("\nreset:");
    machine.reset();
    print_status(&machine);

    println!("\nStates reacting to turnOn: {:?}", machine.states(Some("turnOn")));

    println!("\n=== Example Complete ===");
    Ok(())
}
