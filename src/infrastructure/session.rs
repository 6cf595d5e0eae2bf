use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use log::debug;
use tokio::sync::{Mutex, mpsc};

use crate::{FetchCoordinator, FetchOutcome, ResultPresenter, SearchResult};

/// Owns the visible result list of one search screen.
///
/// Every refresh is tagged with a monotonically increasing generation
/// number; outcomes whose generation is no longer the latest are discarded
/// on arrival, so a stale refresh can never overwrite a newer one. All
/// surviving outcomes pass through a single delivery task, which is the
/// only place the shared list is mutated: a successful outcome replaces
/// the entire list, a failure leaves it untouched. The presenter is
/// notified from that task only, never concurrently.
pub struct SearchSession {
    coordinator: Arc<FetchCoordinator>,
    presenter: Arc<dyn ResultPresenter>,
    latest_generation: Arc<AtomicU64>,
    current_results: Arc<Mutex<Vec<SearchResult>>>,
    outcome_tx: mpsc::UnboundedSender<(u64, FetchOutcome)>,
}

impl SearchSession {
    /// Creates a new `SearchSession` and spawns its delivery task.
    pub fn new(coordinator: Arc<FetchCoordinator>, presenter: Arc<dyn ResultPresenter>) -> Self {
        let latest_generation = Arc::new(AtomicU64::new(0));
        let current_results = Arc::new(Mutex::new(Vec::new()));
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_delivery(
            outcome_rx,
            Arc::clone(&latest_generation),
            Arc::clone(&current_results),
            Arc::clone(&presenter),
        ));

        Self {
            coordinator,
            presenter,
            latest_generation,
            current_results,
            outcome_tx,
        }
    }

    /// Starts a refresh for the given query text.
    ///
    /// Returns immediately; the outcome reaches the presenter through the
    /// delivery task. Starting a new refresh supersedes any in-flight one:
    /// the older refresh still runs to completion but its outcome arrives
    /// with a stale generation and is discarded.
    pub fn trigger_refresh(&self, query: &str) {
        let generation = self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Starting refresh generation {generation} for query: {query}");
        let coordinator = Arc::clone(&self.coordinator);
        let outcome_tx = self.outcome_tx.clone();
        let query = query.to_string();
        tokio::spawn(async move {
            let outcome = coordinator.refresh(&query).await;
            if outcome_tx.send((generation, outcome)).is_err() {
                debug!("Delivery task is gone, dropping outcome of generation {generation}");
            }
        });
    }

    /// Handles a selection event on the visible list.
    ///
    /// Returns the selected result and notifies the presenter for detail
    /// display, or `None` when the index is out of bounds.
    pub async fn select(&self, index: usize) -> Option<SearchResult> {
        let selected = self.current_results.lock().await.get(index).cloned()?;
        self.presenter.on_select(&selected);

        Some(selected)
    }

    /// Retrieves a snapshot of the visible result list.
    pub async fn current_results(&self) -> Vec<SearchResult> {
        self.current_results.lock().await.clone()
    }
}

async fn run_delivery(
    mut outcome_rx: mpsc::UnboundedReceiver<(u64, FetchOutcome)>,
    latest_generation: Arc<AtomicU64>,
    current_results: Arc<Mutex<Vec<SearchResult>>>,
    presenter: Arc<dyn ResultPresenter>,
) {
    while let Some((generation, outcome)) = outcome_rx.recv().await {
        if generation != latest_generation.load(Ordering::SeqCst) {
            debug!("Discarding stale outcome of generation {generation}");
            continue;
        }
        if let FetchOutcome::Success(results) = &outcome {
            *current_results.lock().await = results.clone();
        }
        presenter.on_outcome(&outcome);
    }
}
