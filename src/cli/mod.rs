//! Command implementations for the `strs` binary.

pub mod commands;
