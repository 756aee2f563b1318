//! Debounce and ordering behaviour of `SearchController`, driven with a
//! paused tokio clock and an in-memory title source.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use catalog_core::catalog::TitleRecord;
use catalog_tui::client::{FetchError, TitleSource};
use catalog_tui::controller::SearchController;

const DEBOUNCE: Duration = Duration::from_millis(1000);

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Default)]
struct FakeSource {
    calls: Mutex<Vec<String>>,
    delays: HashMap<&'static str, Duration>,
    failing: AtomicBool,
}

impl FakeSource {
    fn with_delays(delays: &[(&'static str, Duration)]) -> Self {
        Self {
            delays: delays.iter().copied().collect(),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TitleSource for FakeSource {
    async fn search(&self, term: &str) -> Result<Vec<TitleRecord>, FetchError> {
        self.calls.lock().unwrap().push(term.to_string());

        let delay = self
            .delays
            .get(term)
            .copied()
            .unwrap_or(Duration::from_millis(100));
        tokio::time::sleep(delay).await;

        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::Status {
                status: 500,
                message: "Error fetching data".into(),
            });
        }
        Ok(vec![record(term)])
    }
}

fn record(term: &str) -> TitleRecord {
    TitleRecord {
        id: format!("id-{term}"),
        title: format!("Result for {term}"),
        kind: "Movie".to_string(),
        release_year: 2020,
        rating: None,
        duration: "100 min".to_string(),
        date_added: None,
        description: String::new(),
        directors: vec![],
        countries: vec![],
        categories: vec![],
    }
}

fn titles<S: TitleSource + 'static>(controller: &SearchController<S>) -> Vec<String> {
    controller
        .view()
        .results()
        .iter()
        .map(|r| r.title.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Test: the mounted view fetches the empty term once the delay elapses
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn initial_fetch_uses_empty_term() {
    let source = Arc::new(FakeSource::default());
    let mut controller = SearchController::new(Arc::clone(&source), DEBOUNCE);

    assert!(controller.view().is_loading());
    assert!(source.calls().is_empty());

    controller.process_next().await; // settled
    controller.process_next().await; // fetched

    assert_eq!(source.calls(), vec![""]);
    assert!(!controller.view().is_loading());
    assert_eq!(titles(&controller), vec!["Result for "]);
}

// ---------------------------------------------------------------------------
// Test: rapid typing produces exactly one fetch for the final term
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn rapid_typing_issues_one_fetch() {
    let source = Arc::new(FakeSource::default());
    let mut controller = SearchController::new(Arc::clone(&source), DEBOUNCE);

    controller.set_search_term("a");
    tokio::time::advance(Duration::from_millis(300)).await;
    controller.set_search_term("ab");
    tokio::time::advance(Duration::from_millis(300)).await;
    controller.set_search_term("abc");

    controller.process_next().await;
    controller.process_next().await;

    assert_eq!(source.calls(), vec!["abc"]);
    assert_eq!(titles(&controller), vec!["Result for abc"]);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(controller.drain_events(), 0);
    assert_eq!(source.calls().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: a slow response for an older term never overwrites newer rows
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn late_response_for_older_term_is_discarded() {
    let source = Arc::new(FakeSource::with_delays(&[("slow", Duration::from_secs(5))]));
    let mut controller = SearchController::new(Arc::clone(&source), DEBOUNCE);

    controller.set_search_term("slow");
    controller.process_next().await; // "slow" fetch in flight

    tokio::time::advance(Duration::from_millis(200)).await;
    controller.set_search_term("fast");
    controller.process_next().await; // "fast" fetch in flight
    controller.process_next().await; // "fast" completes first

    assert_eq!(titles(&controller), vec!["Result for fast"]);
    assert!(!controller.view().is_loading());

    controller.process_next().await; // "slow" completes late

    assert_eq!(source.calls(), vec!["slow", "fast"]);
    assert_eq!(titles(&controller), vec!["Result for fast"]);
    assert_eq!(controller.view().search_term(), "fast");
}

// ---------------------------------------------------------------------------
// Test: a failed fetch surfaces an error that retry clears
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn failed_fetch_sets_error_and_retry_recovers() {
    let source = Arc::new(FakeSource::default());
    let mut controller = SearchController::new(Arc::clone(&source), DEBOUNCE);

    controller.set_search_term("zo");
    controller.process_next().await;
    controller.process_next().await;
    assert_eq!(titles(&controller), vec!["Result for zo"]);

    source.failing.store(true, Ordering::SeqCst);
    controller.set_search_term("zod");
    controller.process_next().await;
    controller.process_next().await;

    assert!(!controller.view().is_loading());
    assert_eq!(
        controller.view().error(),
        Some("server returned 500: Error fetching data")
    );
    assert_eq!(titles(&controller), vec!["Result for zo"]);

    source.failing.store(false, Ordering::SeqCst);
    controller.retry();
    assert!(controller.view().is_loading());
    controller.process_next().await;

    assert!(controller.view().error().is_none());
    assert_eq!(titles(&controller), vec!["Result for zod"]);
    assert_eq!(source.calls(), vec!["zo", "zod", "zod"]);
}

// ---------------------------------------------------------------------------
// Test: backspace and clear restart the debounce like any other edit
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn editing_keys_reschedule_fetch() {
    let source = Arc::new(FakeSource::default());
    let mut controller = SearchController::new(Arc::clone(&source), DEBOUNCE);

    controller.push_char('z');
    controller.push_char('o');
    controller.pop_char();
    assert_eq!(controller.view().search_term(), "z");

    controller.process_next().await;
    controller.process_next().await;
    assert_eq!(source.calls(), vec!["z"]);

    controller.clear();
    controller.process_next().await;
    controller.process_next().await;
    assert_eq!(source.calls(), vec!["z", ""]);
}

// ---------------------------------------------------------------------------
// Test: a timer that fired before a net-zero edit does not fetch twice
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn superseded_settle_event_is_ignored() {
    let source = Arc::new(FakeSource::default());
    let mut controller = SearchController::new(Arc::clone(&source), DEBOUNCE);

    controller.set_search_term("abc");
    tokio::time::sleep(Duration::from_millis(1001)).await;

    // The "abc" timer has fired and its event is queued; the edit re-arms.
    controller.push_char('d');
    controller.pop_char();
    assert_eq!(controller.drain_events(), 1);
    assert!(source.calls().is_empty());

    controller.process_next().await; // settled
    controller.process_next().await; // fetched
    assert_eq!(source.calls(), vec!["abc"]);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(controller.drain_events(), 0);
    assert_eq!(source.calls(), vec!["abc"]);
}
