//! Data types shared across the Ratchet crates.

pub mod rule;

pub use rule::Rule;
