//! Home Security Panel
//!
//! This example loads a home security panel from a plain-text transition
//! listing and feeds it command sequences.
//!
//! Key concepts:
//! - Building from `source symbol target` lines
//! - Strict validation at build time
//! - Dead-state completion for unlisted commands
//! - Rendering the available commands and the full table
//!
//! Run with: cargo run --example security_system

use dfa_engine::automaton::Dfa;
use dfa_engine::builder::DfaBuilder;
use dfa_engine::core::Step;

const PANEL: &str = "
    # arming
    Disarmed arm_home Armed_Home
    Disarmed arm_away Armed_Away
    Armed_Home arm_home Armed_Home
    Armed_Away arm_away Armed_Away
    # sensors
    Armed_Home motion Triggered
    Armed_Away motion Triggered
    Armed_Home door Entry_Delay
    Armed_Away door Entry_Delay
    Armed_Home window Triggered
    Armed_Away window Triggered
    Entry_Delay delay_end Alarm
    Disarmed motion Disarmed
    Disarmed door Disarmed
    Disarmed window Disarmed
    # disarming
    Armed_Home disarm Disarmed
    Armed_Away disarm Disarmed
    Entry_Delay disarm Disarmed
    Alarm disarm Disarmed
    Triggered disarm Disarmed
    Disarmed disarm Disarmed
";

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

fn build_panel() -> Result<Dfa<String, String>, Box<dyn std::error::Error>> {
    let dfa = DfaBuilder::new()
        .states(words("Disarmed Armed_Home Armed_Away Entry_Delay Alarm Triggered"))
        .alphabet(words("arm_home arm_away disarm motion door window delay_end"))
        .start("Disarmed".to_string())
        .accepting(words("Armed_Home Armed_Away"))
        .strict(true)
        .transition_lines(PANEL)?
        .build()?;
    Ok(dfa)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Home Security Panel ===\n");

    let mut panel = build_panel()?;
    println!("{}\n", panel);

    for commands in [
        "arm_home",
        "arm_away door",
        "arm_away door delay_end",
        "arm_home window disarm",
        "delay_end",
        "arm_home siren",
    ] {
        let outcome = panel.run(words(commands));
        let armed = panel.accepts(words(commands));
        match outcome {
            Step::Valid(state) => println!("  {:<28} -> {} (armed: {:?})", commands, state, armed),
            Step::Invalid => println!("  {:<28} -> unrecognized command", commands),
            Step::Unset => println!("  {:<28} -> no state", commands),
        }
    }

    panel.reset();
    if let Some(current) = panel.current().cloned() {
        let available: Vec<&String> = panel.available_symbols(&current);
        println!("\nCommands available in {}: {:?}", current, available);
    }

    println!("\nTransition table:");
    for (state, symbol, target) in panel.table_rows() {
        println!(
            "  {:<12} {:<10} {}",
            state,
            symbol,
            target.map(String::as_str).unwrap_or("-")
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
