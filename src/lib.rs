//! `estimate-sync` library crate.
//!
//! The binary (`estimate-sync`) is a thin wrapper around this library so that:
//!
//! - the estimation table and reconciliation logic are testable without a network
//! - the GitHub transport can be swapped for an in-memory fake in tests

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod report;
