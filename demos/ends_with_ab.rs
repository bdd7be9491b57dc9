//! Ends With "ab"
//!
//! This example runs the classic "strings ending in ab" automaton over a
//! handful of inputs, including one with a symbol outside the alphabet.
//!
//! Key concepts:
//! - Three-valued acceptance (accepted, rejected, invalid input)
//! - Re-running one definition without rebuilding it
//! - Step-by-step traces
//!
//! Run with: cargo run --example ends_with_ab

use dfa_engine::automaton::Dfa;
use dfa_engine::core::Acceptance;

fn main() {
    println!("=== Ends With \"ab\" ===\n");

    let mut dfa = Dfa::ends_with_ab();
    println!("{}", dfa);

    for input in ["ab", "aab", "aba", "b", "", "ac"] {
        let verdict = match dfa.accepts(input.chars()) {
            Acceptance::Accepted => "accepted",
            Acceptance::Rejected => "rejected",
            Acceptance::InvalidInput => "invalid input",
        };
        println!("  {:>5?} -> {}", input, verdict);
    }

    println!("\nTrace of \"abab\":");
    match dfa.trace("abab".chars()) {
        Ok(trace) => {
            for step in trace.steps() {
                println!("  {} --{}--> {:?}", step.from, step.symbol, step.to);
            }
        }
        Err(e) => println!("  {}", e),
    }

    println!("\n=== Example Complete ===");
}
