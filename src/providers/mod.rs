//! Provider execution
//!
//! Turns one declarative [`ProviderSpec`](crate::config::ProviderSpec) plus a
//! query into a list of extracted results, isolating every failure mode into
//! a per-provider error.

mod client;

pub use client::{ProviderClient, ProviderFetch};
