//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod import_repo;
pub mod title_repo;

pub use import_repo::ImportRepo;
pub use title_repo::TitleRepo;
