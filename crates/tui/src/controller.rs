//! Drives the search table: debounces edits, issues fetches, and feeds
//! their outcomes back into the [`SearchTableView`].

use std::sync::Arc;

use catalog_core::catalog::TitleRecord;
use tokio::sync::mpsc;

use crate::client::{FetchError, TitleSource};
use crate::debounce::Debouncer;
use crate::view::SearchTableView;

/// Messages produced by background tasks for the controller.
#[derive(Debug)]
pub enum ViewEvent {
    /// The debounce run tagged `generation` elapsed.
    Settled { generation: u64 },
    /// The fetch tagged `seq` finished.
    Fetched {
        seq: u64,
        outcome: Result<Vec<TitleRecord>, FetchError>,
    },
}

pub struct SearchController<S> {
    view: SearchTableView,
    source: Arc<S>,
    debouncer: Debouncer,
    /// Tag of the most recently armed debounce run.
    generation: u64,
    events_tx: mpsc::UnboundedSender<ViewEvent>,
    events_rx: mpsc::UnboundedReceiver<ViewEvent>,
}

impl<S> SearchController<S>
where
    S: TitleSource + 'static,
{
    /// Create the controller and schedule the initial fetch for the empty
    /// term. Must be called from within a tokio runtime.
    pub fn new(source: Arc<S>, debounce: std::time::Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut controller = Self {
            view: SearchTableView::new(),
            source,
            debouncer: Debouncer::new(debounce),
            generation: 0,
            events_tx,
            events_rx,
        };
        controller.schedule_fetch();
        controller
    }

    pub fn view(&self) -> &SearchTableView {
        &self.view
    }

    /// Record an edit of the search term and restart the debounce timer.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.set_search_term(term);
        self.schedule_fetch();
    }

    pub fn push_char(&mut self, c: char) {
        let mut term = self.view.search_term().to_string();
        term.push(c);
        self.set_search_term(term);
    }

    pub fn pop_char(&mut self) {
        let mut term = self.view.search_term().to_string();
        if term.pop().is_some() {
            self.set_search_term(term);
        }
    }

    pub fn clear(&mut self) {
        if !self.view.search_term().is_empty() {
            self.set_search_term(String::new());
        }
    }

    /// Fetch the current term immediately, skipping the debounce.
    pub fn retry(&mut self) {
        self.debouncer.cancel();
        self.generation += 1;
        self.start_fetch();
    }

    /// Apply one event to the view.
    pub fn handle(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::Settled { generation } => {
                // A timer can fire just before an edit aborts it.
                if generation == self.generation {
                    self.start_fetch();
                }
            }
            ViewEvent::Fetched { seq, outcome } => {
                self.view.complete_fetch(seq, outcome);
            }
        }
    }

    /// Apply every event already queued without waiting. Returns the number
    /// handled.
    pub fn drain_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle(event);
            handled += 1;
        }
        handled
    }

    /// Wait for the next event and apply it.
    pub async fn process_next(&mut self) {
        // The controller owns a sender, so the channel never closes.
        if let Some(event) = self.events_rx.recv().await {
            self.handle(event);
        }
    }

    fn schedule_fetch(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let tx = self.events_tx.clone();
        self.debouncer.schedule(move || {
            let _ = tx.send(ViewEvent::Settled { generation });
        });
    }

    fn start_fetch(&mut self) {
        let ticket = self.view.begin_fetch();
        tracing::debug!(seq = ticket.seq, term = %ticket.term, "Fetching titles");

        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = source.search(&ticket.term).await;
            let _ = tx.send(ViewEvent::Fetched {
                seq: ticket.seq,
                outcome,
            });
        });
    }
}
