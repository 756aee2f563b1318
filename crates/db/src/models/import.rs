//! Import run bookkeeping.

use serde::Serialize;

/// Row counts written by one catalog import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Rows read from the CSV into staging.
    pub staged: u64,
    /// Titles inserted or updated.
    pub titles: u64,
    pub directors: u64,
    pub countries: u64,
    pub categories: u64,
    /// Junction rows written across all three relations.
    pub links: u64,
}
