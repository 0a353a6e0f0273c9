//! Account addresses and their textual forms.
//!
//! An [`Address`] renders as a 34 characters base58check string starting with
//! `A`. The [`ADDRESS_EMPTY`] sentinel renders as
//! `AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM`.

pub mod base58;
pub mod consts;
mod types;

pub use types::{Address, DecodingError, ADDRESS_EMPTY};
