//! Database row structs and DTOs.

pub mod import;
pub mod title;
