//! Topograin CLI library.
//!
//! This crate provides the core functionality for the Topograin CLI:
//! spec loading, backend dispatch, and the subcommands.

pub mod commands;
pub mod dispatch;
pub mod input;
