//! HTTP networking
//!
//! A single shared client backs every provider call; providers only differ
//! in the URL and headers their spec declares.

mod client;

pub use client::{HttpClient, HttpResponse};
