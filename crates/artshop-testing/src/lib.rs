//! Test support for the admin client:
//! - [`FakeApi`]: in-memory implementation of the `Api` trait with a call
//!   log and per-method failure injection
//! - [`fixtures`]: sample catalog data

pub mod fake;
pub mod fixtures;

pub use fake::FakeApi;
