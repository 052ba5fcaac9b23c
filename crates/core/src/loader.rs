//! Bounded-retry orchestration of the build pipeline.

use std::{sync::Arc, thread};

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::{
    config::LoaderConfig,
    error::{DataError, DataWarning, HostError},
    pipeline::build_game_data,
    source::TableSource,
    store::GameDataStore,
};

/// Outcome of one load, successful or not.
#[derive(Debug)]
pub struct LoadReport {
    /// Whether data was published.
    pub ready: bool,
    /// Attempts made, the successful one included.
    pub attempts: u32,
    /// Non-fatal problems of the successful attempt.
    pub warnings: Vec<DataWarning>,
    /// Error of the final attempt when every attempt failed.
    pub last_error: Option<DataError>,
}

/// Builds game data from a [`TableSource`] and publishes it to a [`GameDataStore`].
///
/// The host may fail spuriously while its tables are enumerated, so every
/// failure is treated as transient and the whole build is retried from
/// scratch, up to [`LoaderConfig::max_attempts`] times.
#[derive(Clone)]
pub struct GameDataLoader {
    store: GameDataStore,
    config: LoaderConfig,
}

impl GameDataLoader {
    /// Create a loader publishing into `store`.
    pub fn new(store: GameDataStore, config: LoaderConfig) -> Self {
        Self { store, config }
    }

    /// Store the loader publishes into.
    pub fn store(&self) -> &GameDataStore {
        &self.store
    }

    /// Active configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load on the calling thread, sleeping between attempts.
    pub fn load_blocking(&self, source: &dyn TableSource) -> LoadReport {
        let max_attempts = self.config.attempts();
        let mut attempt = 1;
        loop {
            match self.attempt(source, attempt) {
                Ok(report) => return report,
                Err(err) if attempt < max_attempts => {
                    warn!("exception while parsing! attempt:{attempt}, retry:true ({err})");
                    thread::sleep(self.config.retry_delay());
                    info!("retrying game data parsers...");
                    attempt += 1;
                }
                Err(err) => return self.give_up(attempt, err),
            }
        }
    }

    /// Load without blocking the async runtime.
    ///
    /// Each attempt runs on the blocking pool; a panic inside the host
    /// source counts as a transient failure like any other.
    pub async fn load(&self, source: Arc<dyn TableSource>) -> LoadReport {
        let max_attempts = self.config.attempts();
        let mut attempt = 1;
        loop {
            let loader = self.clone();
            let task_source = Arc::clone(&source);
            let result =
                tokio::task::spawn_blocking(move || loader.attempt(task_source.as_ref(), attempt))
                    .await
                    .unwrap_or_else(|join_err| {
                        self.store.reject();
                        Err(DataError::Host(HostError::Enumeration {
                            sheet: "*".to_string(),
                            reason: join_err.to_string(),
                        }))
                    });

            match result {
                Ok(report) => return report,
                Err(err) if attempt < max_attempts => {
                    warn!("exception while parsing! attempt:{attempt}, retry:true ({err})");
                    tokio::time::sleep(self.config.retry_delay()).await;
                    info!("retrying game data parsers...");
                    attempt += 1;
                }
                Err(err) => return self.give_up(attempt, err),
            }
        }
    }

    /// Run [`GameDataLoader::load`] as a background task.
    pub fn spawn(&self, source: Arc<dyn TableSource>) -> JoinHandle<LoadReport> {
        let loader = self.clone();
        tokio::spawn(async move { loader.load(source).await })
    }

    fn attempt(&self, source: &dyn TableSource, attempt: u32) -> Result<LoadReport, DataError> {
        self.store.begin_attempt(attempt);
        match build_game_data(source, &self.config) {
            Ok(output) => {
                let cards = output.data.cards.count();
                let npcs = output.data.opponents.len();
                self.store.publish(output.data);
                info!("loaded game data for cards:{cards}, npcs:{npcs}");
                Ok(LoadReport {
                    ready: true,
                    attempts: attempt,
                    warnings: output.warnings,
                    last_error: None,
                })
            }
            Err(err) => {
                self.store.reject();
                Err(err)
            }
        }
    }

    fn give_up(&self, attempts: u32, err: DataError) -> LoadReport {
        error!("failed to load game data after {attempts} attempts: {err}");
        LoadReport {
            ready: false,
            attempts,
            warnings: Vec::new(),
            last_error: Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use serde_json::Value;

    use crate::{
        pipeline::fixtures,
        source::{Sheet, SnapshotSource, TripleTriadRule},
        store::LoadState,
    };

    /// Fails (or panics) on its first `failures` calls, then serves the snapshot.
    struct FlakySource {
        inner: SnapshotSource,
        failures: AtomicU32,
        panic: bool,
    }

    impl FlakySource {
        fn new(inner: SnapshotSource, failures: u32) -> Self {
            Self {
                inner,
                failures: AtomicU32::new(failures),
                panic: false,
            }
        }
    }

    impl TableSource for FlakySource {
        fn raw_sheet(&self, name: &str) -> Result<Option<Vec<Value>>, HostError> {
            let failing = self
                .failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
                .is_ok();
            if failing {
                if self.panic {
                    panic!("enumerator invalidated while reading {name}");
                }
                return Err(HostError::Enumeration {
                    sheet: name.to_string(),
                    reason: "collection was modified".to_string(),
                });
            }
            self.inner.raw_sheet(name)
        }
    }

    fn fast_config() -> LoaderConfig {
        LoaderConfig {
            retry_delay_ms: 0,
            ..LoaderConfig::default()
        }
    }

    #[test]
    fn recovers_after_transient_failures() {
        let loader = GameDataLoader::new(GameDataStore::new(), fast_config());
        let source = FlakySource::new(fixtures::snapshot(), 3);

        let report = loader.load_blocking(&source);
        assert!(report.ready, "{:?}", report.last_error);
        assert_eq!(report.attempts, 4);
        assert!(loader.store().is_ready());
        assert_eq!(loader.store().attempts(), 4);
        assert!(loader.store().snapshot().is_some());
    }

    #[test]
    fn persistent_failure_leaves_store_empty() {
        let loader = GameDataLoader::new(GameDataStore::new(), fast_config());
        let source = FlakySource::new(fixtures::snapshot(), u32::MAX);

        let report = loader.load_blocking(&source);
        assert!(!report.ready);
        assert_eq!(report.attempts, 4);
        assert!(matches!(report.last_error, Some(DataError::Host(_))));
        assert_eq!(loader.store().state(), LoadState::Failed);
        assert!(loader.store().snapshot().is_none());
    }

    #[test]
    fn rule_count_mismatch_is_retried_then_fatal() {
        let loader = GameDataLoader::new(GameDataStore::new(), fast_config());
        let mut source = fixtures::snapshot();
        source
            .insert_sheet(fixtures::rule_rows().into_iter().take(15))
            .expect("rule rows serialize");

        let report = loader.load_blocking(&source);
        assert!(!report.ready);
        assert_eq!(report.attempts, 4);
        assert!(matches!(
            report.last_error,
            Some(DataError::SchemaMismatch {
                table: "TripleTriadRule",
                ..
            })
        ));
        assert!(!loader.store().is_ready());
        assert!(loader.store().snapshot().is_none());
    }

    #[test]
    fn failed_reload_withdraws_previous_data() {
        let loader = GameDataLoader::new(GameDataStore::new(), fast_config());
        assert!(loader.load_blocking(&fixtures::snapshot()).ready);

        let mut broken = fixtures::snapshot();
        broken.remove_sheet(TripleTriadRule::NAME);
        let report = loader.load_blocking(&broken);
        assert!(!report.ready);
        assert!(loader.store().snapshot().is_none());
    }

    #[tokio::test]
    async fn background_load_publishes() {
        let loader = GameDataLoader::new(GameDataStore::new(), fast_config());
        let source: Arc<dyn TableSource> = Arc::new(FlakySource::new(fixtures::snapshot(), 1));

        let report = loader.spawn(source).await.expect("load task");
        assert!(report.ready);
        assert_eq!(report.attempts, 2);

        let data = loader.store().snapshot().expect("published data");
        assert_eq!(data.opponents.len(), 2);
    }

    #[tokio::test]
    async fn panicking_source_is_retried() {
        let loader = GameDataLoader::new(GameDataStore::new(), fast_config());
        let mut flaky = FlakySource::new(fixtures::snapshot(), 2);
        flaky.panic = true;

        let report = loader.load(Arc::new(flaky)).await;
        assert!(report.ready);
        assert_eq!(report.attempts, 3);
    }
}
