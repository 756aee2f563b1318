//! Shared catalog types and helpers.
//!
//! This crate has no internal dependencies so the API server, the import
//! tool and the terminal view can all depend on the same wire contract.

pub mod catalog;
pub mod error;
pub mod search;
