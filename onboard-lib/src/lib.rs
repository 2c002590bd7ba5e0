//! Account registration client library
//!
//! A Rust async client library for the account signup flow: draft field
//! normalization, pre-submit validation, the account-creation request, and
//! sequential session-token persistence.

pub mod error;
pub mod flow;
pub mod model;
pub mod session;
pub mod store;
pub mod validate;

mod client;

pub use client::*;
