//! Rental Ledger CLI
//!
//! Console front end over the in-memory rental ledger.

pub mod cli;
pub mod commands;
pub mod input;
pub mod menu;
pub mod output;
