//! HTTP delivery layer for the Fibonacci service.
//!
//! Maps three plain-text GET endpoints onto the `fib-core` computation
//! crate: service identity at `/v`, the nth Fibonacci number at
//! `/fib/n/{num}`, and the running sequence at `/fib/s/{count}`.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
