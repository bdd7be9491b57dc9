//! Checkpoint and Resume
//!
//! This example checkpoints an automaton mid-run and resumes it from both
//! serialization formats.
//!
//! Key concepts:
//! - Canonical snapshots exclude the cursor
//! - Checkpoints carry the cursor separately
//! - JSON for readability, binary for compactness
//!
//! Run with: cargo run --example checkpoint_resume

use dfa_engine::automaton::Dfa;
use dfa_engine::snapshot::Checkpoint;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Checkpoint and Resume ===\n");

    let mut dfa = Dfa::ends_with_ab();
    dfa.step(&'a');
    println!("Cursor before checkpoint: {:?}", dfa.current());

    let checkpoint = dfa.checkpoint();
    let json = checkpoint.to_json_pretty()?;
    let binary = checkpoint.to_binary()?;
    println!("JSON checkpoint ({} bytes):\n{}", json.len(), json);
    println!("Binary checkpoint: {} bytes\n", binary.len());

    let mut from_json = Dfa::restore(Checkpoint::<String, char>::from_json(&json)?)?;
    let mut from_binary = Dfa::restore(Checkpoint::<String, char>::from_binary(&binary)?)?;

    println!("Resumed (JSON) step 'b': {:?}", from_json.step(&'b'));
    println!("Resumed (binary) step 'b': {:?}", from_binary.step(&'b'));
    println!(
        "Snapshots equal: {}",
        from_json.to_snapshot() == dfa.to_snapshot()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
