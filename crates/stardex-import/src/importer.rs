//! Import orchestrator
//!
//! Drives the full pipeline over a stream of raw units: title filtering,
//! sidebar extraction, normalization, record building, persistence, and
//! per-category counting. Per-unit failures are matched explicitly and
//! absorbed; only stream and storage failures abort the run.

use crate::{builders, ImportConfig, ImportError};
use stardex_domain::{ImportStats, RecordStore, SeriesLookup};
use stardex_dump::{filter, DumpError, RawUnit};
use stardex_wiki::{sidebar, SidebarError};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Cooperative cancellation flag, checked between units.
///
/// Cloning shares the flag; any clone can cancel the run.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Create a fresh, uncancelled handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. The in-flight unit completes; no further
    /// units are pulled.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The import orchestrator.
///
/// Owns the store and the series lookup for the duration of a run; both
/// are reclaimable afterwards via [`Importer::into_parts`].
pub struct Importer<S, L> {
    store: S,
    lookup: L,
    config: ImportConfig,
    cancel: CancelHandle,
}

impl<S, L> Importer<S, L>
where
    S: RecordStore,
    S::Error: fmt::Display,
    L: SeriesLookup,
{
    /// Create an importer with the default configuration.
    pub fn new(store: S, lookup: L) -> Self {
        Self::with_config(store, lookup, ImportConfig::default())
    }

    /// Create an importer with an explicit configuration.
    pub fn with_config(store: S, lookup: L, config: ImportConfig) -> Self {
        Self {
            store,
            lookup,
            config,
            cancel: CancelHandle::new(),
        }
    }

    /// A handle that cancels this importer's runs.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// The store, for inspection after a run.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reclaim the store and lookup.
    pub fn into_parts(self) -> (S, L) {
        (self.store, self.lookup)
    }

    /// Run the pipeline over a stream of raw units.
    ///
    /// Returns the accumulated stats when the stream is exhausted or the
    /// run is cancelled. Counters exist (zero included) for every enabled
    /// category.
    pub fn run<I>(&mut self, units: I) -> Result<ImportStats, ImportError>
    where
        I: IntoIterator<Item = Result<RawUnit, DumpError>>,
    {
        let started = Instant::now();
        let mut stats = ImportStats::new(&self.config.categories);

        for unit in units {
            if self.cancel.is_cancelled() {
                info!("import cancelled, returning stats accumulated so far");
                break;
            }
            let unit = unit?;
            stats.units_seen += 1;

            if filter::is_ignored(&unit.title) {
                stats.units_ignored += 1;
                continue;
            }
            let title = filter::strip_qualifier(&unit.title);

            let sidebar = match sidebar::parse(&unit.text) {
                Ok(sidebar) => sidebar,
                Err(SidebarError::NotFound) => {
                    stats.units_without_sidebar += 1;
                    continue;
                }
                Err(SidebarError::Unterminated) => {
                    debug!(title = %title, "sidebar template never closed");
                    stats.units_without_sidebar += 1;
                    continue;
                }
            };

            if !self.config.is_enabled(sidebar.category) {
                debug!(title = %title, category = %sidebar.category, "category not enabled");
                continue;
            }

            let record = match builders::build(
                &title,
                &sidebar,
                &self.lookup,
                self.config.number_policy,
            ) {
                Ok(record) => record,
                Err(error) => {
                    warn!(title = %title, category = %sidebar.category, %error, "unit rejected");
                    stats.build_failures += 1;
                    continue;
                }
            };

            let category = record.category();
            self.store
                .persist(record)
                .map_err(|e| ImportError::Storage(e.to_string()))?;
            stats.record_import(category);
        }

        stats.duration_secs = started.elapsed().as_secs();
        info!(
            imported = stats.total_imported(),
            seen = stats.units_seen,
            "import run finished"
        );
        Ok(stats)
    }
}
