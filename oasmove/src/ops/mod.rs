//! Core operations.
//!
//! This module contains the business logic for oasmove commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod relocate;

pub use check::check;
pub use relocate::relocate;
