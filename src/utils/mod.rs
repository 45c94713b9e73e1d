//! Shared utilities.

pub mod mime;
