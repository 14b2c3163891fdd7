//! # Inductively defined sets

#![warn(clippy::pedantic)]

use indset::prelude::*;
use std::collections::BTreeSet;

fn main() {
    // Generate balanced bracket-like strings from the empty string.
    let base = BTreeSet::from([String::new()]);
    let join = Constructor::binary(|x: &String, y: &String| format!("♡{x}♣{y}"));
    let mut brackets = ClosureGenerator::new(base, [join]);

    for step in 1..=2 {
        println!("step {step}: {:?}", brackets.step());
    }

    // Classify s ↦ 3s (capped at 10) as a mapping {1, …, 5} -> {3, 6, 9, 10}.
    let domain = BTreeSet::from([1, 2, 3, 4, 5]);
    let codomain = BTreeSet::from([3, 6, 9, 10]);
    match classify(&domain, &codomain, |&s| if s < 4 { 3 * s } else { 10 }) {
        Ok(class) => println!("{class}"),
        Err(err) => println!("{err}"),
    }
}
