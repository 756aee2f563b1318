//! State of the search table view.
//!
//! Every fetch is tagged with a sequence number. Only the completion
//! carrying the most recent number is applied; older completions are
//! dropped, so the rendered rows always belong to the latest issued query.

use catalog_core::catalog::TitleRecord;

use crate::client::FetchError;

/// Identifies one issued fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub term: String,
}

#[derive(Debug, Clone)]
pub struct SearchTableView {
    search_term: String,
    results: Vec<TitleRecord>,
    loading: bool,
    error: Option<String>,
    latest_seq: u64,
}

impl Default for SearchTableView {
    /// A freshly mounted view is loading: the initial fetch is already due.
    fn default() -> Self {
        Self {
            search_term: String::new(),
            results: Vec::new(),
            loading: true,
            error: None,
            latest_seq: 0,
        }
    }
}

impl SearchTableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn results(&self) -> &[TitleRecord] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True when the "no results" message should replace the table.
    pub fn shows_empty_message(&self) -> bool {
        !self.loading && self.results.is_empty()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Mark a fetch for the current term as in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.loading = true;
        FetchTicket {
            seq: self.latest_seq,
            term: self.search_term.clone(),
        }
    }

    /// Apply a fetch outcome. Returns `false` when the outcome was stale
    /// and ignored.
    ///
    /// A failed fetch keeps the previous rows and records the error; the
    /// next successful fetch clears it.
    pub fn complete_fetch(
        &mut self,
        seq: u64,
        outcome: Result<Vec<TitleRecord>, FetchError>,
    ) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "Discarding stale search response");
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(results) => {
                self.results = results;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, term = %self.search_term, "Error fetching titles");
                self.error = Some(err.to_string());
            }
        }
        true
    }
}
