//! Background worker for running an import off the async runtime
//!
//! The pipeline itself is blocking, synchronous I/O; this wrapper runs it
//! on a blocking task and wires Ctrl-C to the importer's cancel handle so
//! a long import can be stopped between units.

use crate::{ImportError, Importer};
use stardex_domain::{ImportStats, RecordStore, SeriesLookup};
use stardex_dump::DumpReader;
use std::fmt;
use std::path::PathBuf;

/// Runs an [`Importer`] over a dump file as a background task.
///
/// # Examples
///
/// ```no_run
/// use stardex_import::{ImportWorker, Importer};
/// use stardex_store::{MemoryStore, SeriesCatalog};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let importer = Importer::new(MemoryStore::new(), SeriesCatalog::seeded());
///     let worker = ImportWorker::new(importer);
///
///     let (importer, stats) = worker.run("enmemoryalpha_pages_current.xml").await?;
///     println!("{}", stats.summary());
///     println!("{} records in store", importer.store().len());
///     Ok(())
/// }
/// ```
pub struct ImportWorker<S, L> {
    importer: Importer<S, L>,
}

impl<S, L> ImportWorker<S, L>
where
    S: RecordStore + Send + 'static,
    S::Error: fmt::Display,
    L: SeriesLookup + Send + 'static,
{
    /// Wrap an importer for background execution.
    pub fn new(importer: Importer<S, L>) -> Self {
        Self { importer }
    }

    /// Run the import over the dump at `path`.
    ///
    /// Ctrl-C cancels the run cooperatively: the in-flight unit finishes,
    /// the stats accumulated so far are returned, and the store keeps
    /// everything persisted up to that point.
    pub async fn run(
        self,
        path: impl Into<PathBuf>,
    ) -> Result<(Importer<S, L>, ImportStats), ImportError> {
        let path = path.into();
        let cancel = self.importer.cancel_handle();
        let mut importer = self.importer;

        tracing::info!(path = %path.display(), "import worker started");

        let mut task = tokio::task::spawn_blocking(move || {
            let reader = DumpReader::open(&path)?;
            let stats = importer.run(reader)?;
            Ok::<_, ImportError>((importer, stats))
        });

        let joined = tokio::select! {
            res = &mut task => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutdown signal received, cancelling import");
                cancel.cancel();
                task.await
            }
        };

        let (importer, stats) = match joined {
            Ok(run_result) => run_result?,
            // The blocking task is never aborted, so a join error is a panic
            Err(join_error) => std::panic::resume_unwind(join_error.into_panic()),
        };

        tracing::info!("import worker finished:\n{}", stats.summary());
        Ok((importer, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardex_store::{MemoryStore, SeriesCatalog};
    use std::io::Write;

    const SMALL_DUMP: &str = r#"<mediawiki>
  <siteinfo><sitename>Memory Alpha</sitename></siteinfo>
  <page>
    <title>Caretaker (episode)</title>
    <revision><text>{{sidebar episode|
|sSeries = [[VOY]]
|nSeason = 1
|nEpisode = 1
}}</text></revision>
  </page>
</mediawiki>"#;

    #[tokio::test]
    async fn test_worker_runs_to_completion() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL_DUMP.as_bytes()).unwrap();
        file.flush().unwrap();

        let importer = Importer::new(MemoryStore::new(), SeriesCatalog::seeded());
        let worker = ImportWorker::new(importer);
        let (importer, stats) = worker.run(file.path()).await.unwrap();

        assert_eq!(stats.total_imported(), 1);
        assert_eq!(importer.store().len(), 1);
    }

    #[tokio::test]
    async fn test_worker_surfaces_open_failure() {
        let importer = Importer::new(MemoryStore::new(), SeriesCatalog::seeded());
        let worker = ImportWorker::new(importer);
        let result = worker.run("/nonexistent/dump.xml").await;

        assert!(matches!(result, Err(ImportError::Stream(_))));
    }
}
