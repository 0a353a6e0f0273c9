//! Test fixtures for wasm contracts.
//!
//! A fixture file holds groups of [`TestCase`]s. Each case names a contract
//! method, its parameters and expected result in `type:value` notation, and
//! the witnesses the invocation runs with.

pub mod codec;
pub mod config;
pub mod constants;
pub mod filter;
pub mod models;
pub mod param;
pub mod test_utils;
mod utils;

pub use models::{TestCase, TestEnv};
