//! The dashboard event loop
//!
//! One task owns the selection, the cached records and the renderer. Each
//! fetch runs as a spawned task tagged with a generation number and its
//! result is read back through the task's join handle. Starting a new fetch
//! aborts and drops the previous handle, so a superseded result is never
//! rendered even when it already completed: the last request wins. A fetch
//! task that panics is reported like any other failed fetch.

use crate::config::DashConfig;
use crate::error::DashError;
use crate::event::DashboardEvent;
use crate::selection::SelectionCell;
use crate::view::{load_view, ChartRenderer, DashboardView};
use rashut_model::{Record, Year};
use rashut_nav::{coverage_gaps, Destination, NavigationResolver};
use rashut_query::{QueryError, QueryFilters, RecordSource};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

type FetchResult = Result<Vec<Record>, QueryError>;

#[derive(Debug)]
struct InFlight {
    generation: u64,
    year: Year,
    handle: JoinHandle<FetchResult>,
}

/// Data the current chart was drawn from, kept for re-renders
#[derive(Debug, Clone)]
struct Loaded {
    year: Year,
    records: Option<Arc<Vec<Record>>>,
    fetch_error: Option<String>,
}

/// Wait for the in-flight fetch; pending forever when idle
async fn settle(in_flight: &mut Option<InFlight>) -> FetchResult {
    let Some(fetch) = in_flight.as_mut() else {
        return std::future::pending().await;
    };
    match (&mut fetch.handle).await {
        Ok(result) => result,
        Err(e) => Err(QueryError::Source(format!("fetch task failed: {e}"))),
    }
}

/// Application shell
pub struct Dashboard<R> {
    config: DashConfig,
    source: Arc<dyn RecordSource>,
    renderer: R,
    resolver: NavigationResolver,
    selection: SelectionCell,
    generation: u64,
    in_flight: Option<InFlight>,
    loaded: Option<Loaded>,
    last_view: Option<DashboardView>,
}

impl<R: ChartRenderer + 'static> Dashboard<R> {
    /// Create a shell
    ///
    /// # Errors
    /// Returns `DashError::Config` if the configuration does not validate.
    pub fn new(
        config: DashConfig,
        source: Arc<dyn RecordSource>,
        renderer: R,
    ) -> Result<Self, DashError> {
        config.validate()?;
        let resolver = NavigationResolver::new(config.resolved_server_base());
        let selection = SelectionCell::new(config.initial_year);
        Ok(Self {
            config,
            source,
            renderer,
            resolver,
            selection,
            generation: 0,
            in_flight: None,
            loaded: None,
            last_view: None,
        })
    }

    /// Selected year
    #[must_use]
    pub fn selection(&self) -> &SelectionCell {
        &self.selection
    }

    /// Most recently rendered view
    #[must_use]
    pub fn last_view(&self) -> Option<&DashboardView> {
        self.last_view.as_ref()
    }

    /// Fetch and compute one year without touching the renderer
    ///
    /// # Errors
    /// Returns `DashError::Query` if the fetch fails.
    pub async fn snapshot(&self, year: Year) -> Result<DashboardView, DashError> {
        Ok(load_view(self.source.as_ref(), &self.config.query_code, year).await?)
    }

    /// Process events until the channel closes and outstanding work settles
    ///
    /// Loads the initial year first. Returns the renderer once done. Queued
    /// events are handled before a finished fetch is rendered.
    pub async fn run(mut self, mut events: mpsc::Receiver<DashboardEvent>) -> R {
        let mut resize_deadline: Option<Instant> = None;
        let mut events_open = true;

        coverage_gaps(&self.resolver, &self.config.selectable_years);
        tracing::info!(
            year = %self.selection.get(),
            server = %self.resolver.server_base(),
            "dashboard starting"
        );
        self.start_fetch(self.selection.get());

        loop {
            if !events_open && self.in_flight.is_none() && resize_deadline.is_none() {
                break;
            }

            let deadline = resize_deadline;
            let resize_timer = async move {
                match deadline {
                    Some(deadline) => sleep_until(deadline).await,
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                biased;
                event = events.recv(), if events_open => match event {
                    Some(DashboardEvent::Resized) => {
                        resize_deadline = Some(Instant::now() + self.config.resize_debounce());
                    }
                    Some(event) => self.handle_event(event),
                    None => {
                        tracing::debug!("event channel closed");
                        events_open = false;
                    }
                },
                result = settle(&mut self.in_flight), if self.in_flight.is_some() => self.on_fetch(result),
                () = resize_timer => {
                    resize_deadline = None;
                    self.rerender();
                }
            }
        }

        tracing::info!("dashboard stopped");
        self.renderer
    }

    fn handle_event(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::YearSelected(selection) => {
                let year = selection.year;
                if !self.config.selectable_years.contains(&year) {
                    tracing::warn!(%year, "year is not selectable, ignoring");
                    return;
                }
                self.selection.set(year);
                self.start_fetch(year);
            }
            DashboardEvent::Refresh => self.start_fetch(self.selection.get()),
            DashboardEvent::NodeClicked(node_id) => {
                let destination = self.resolver.resolve(&node_id, self.selection.get());
                self.open(&node_id, &destination);
            }
            // debounced by the loop
            DashboardEvent::Resized => {}
        }
    }

    fn open(&mut self, node_id: &str, destination: &Destination) {
        tracing::info!(node = node_id, url = %destination, "opening detail view");
        self.renderer.open_detail(destination);
    }

    fn start_fetch(&mut self, year: Year) {
        if let Some(previous) = self.in_flight.take() {
            if previous.handle.is_finished() {
                tracing::debug!(
                    generation = previous.generation,
                    current = self.generation + 1,
                    year = %previous.year,
                    "discarding stale fetch result"
                );
            } else {
                tracing::debug!(
                    generation = previous.generation,
                    year = %previous.year,
                    "superseding in-flight fetch"
                );
            }
            previous.handle.abort();
        }

        self.generation += 1;
        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let query_code = self.config.query_code.clone();

        let handle = tokio::spawn(async move {
            tracing::debug!(generation, %year, "fetch started");
            source.query(&query_code, &QueryFilters::for_year(year)).await
        });

        self.in_flight = Some(InFlight {
            generation,
            year,
            handle,
        });
    }

    fn on_fetch(&mut self, result: FetchResult) {
        let Some(fetch) = self.in_flight.take() else {
            return;
        };

        self.loaded = Some(match result {
            Ok(records) => {
                tracing::info!(year = %fetch.year, records = records.len(), "records loaded");
                Loaded {
                    year: fetch.year,
                    records: Some(Arc::new(records)),
                    fetch_error: None,
                }
            }
            Err(e) => {
                tracing::error!(
                    year = %fetch.year,
                    generation = fetch.generation,
                    transient = e.is_transient(),
                    error = %e,
                    "fetch failed, showing fallback data"
                );
                Loaded {
                    year: fetch.year,
                    records: None,
                    fetch_error: Some(e.to_string()),
                }
            }
        });
        self.rerender();
    }

    fn rerender(&mut self) {
        let Some(loaded) = self.loaded.clone() else {
            tracing::debug!("nothing loaded yet, skipping render");
            return;
        };

        let mut view = DashboardView::compute(loaded.records.as_deref().map(Vec::as_slice), loaded.year);
        if let Some(message) = loaded.fetch_error {
            view = view.with_fetch_error(message);
        }
        if view.badges.converted.is_none() {
            view.badges.converted = self
                .last_view
                .as_ref()
                .and_then(|previous| previous.badges.converted);
        }

        match self.renderer.render(&view) {
            Ok(()) => tracing::info!(
                year = %view.year,
                total = view.statistics.total,
                fallback = view.is_fallback(),
                "chart rendered"
            ),
            Err(e) => {
                tracing::error!(error = %e, "chart render failed");
                self.renderer.show_error(&e.to_string());
            }
        }
        self.last_view = Some(view);
    }
}

impl<R> std::fmt::Debug for Dashboard<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("selection", &self.selection.get())
            .field("generation", &self.generation)
            .field("loaded", &self.loaded.as_ref().map(|l| l.year))
            .finish_non_exhaustive()
    }
}
