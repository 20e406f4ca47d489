//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, seedable random number generation.
//! All randomness in the crate (batting orders) goes through this module;
//! the lineup scheduler itself never draws random numbers.

mod xorshift;

pub use xorshift::RngManager;
