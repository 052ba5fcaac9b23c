//! Shared, read-mostly home of the published game data.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::GameData;

/// Progress of the most recent load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing attempted yet.
    Idle,
    /// A build attempt is in progress.
    Running {
        /// 1-based attempt number.
        attempt: u32,
    },
    /// Data is published.
    Ready,
    /// The latest attempt failed and catalogues are empty. A new
    /// `Running` follows while retries remain; otherwise this is final.
    Failed,
}

/// Thread-safe holder of the published [`GameData`].
///
/// Readers only ever see a complete build: publishing swaps one `Arc`, and
/// `snapshot` returns `None` whenever the data is not ready.
#[derive(Clone)]
pub struct GameDataStore {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    data: Option<Arc<GameData>>,
    state: LoadState,
    attempts: u32,
}

impl Default for GameDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDataStore {
    /// Empty, idle store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                data: None,
                state: LoadState::Idle,
                attempts: 0,
            })),
        }
    }

    /// Whether a fully built data set is published.
    pub fn is_ready(&self) -> bool {
        self.inner.read().state == LoadState::Ready
    }

    /// Current load state.
    pub fn state(&self) -> LoadState {
        self.inner.read().state
    }

    /// Attempts made by the most recent load.
    pub fn attempts(&self) -> u32 {
        self.inner.read().attempts
    }

    /// Published data, if ready.
    pub fn snapshot(&self) -> Option<Arc<GameData>> {
        let inner = self.inner.read();
        match inner.state {
            LoadState::Ready => inner.data.clone(),
            _ => None,
        }
    }

    /// Withdraw published data and mark an attempt as running.
    pub(crate) fn begin_attempt(&self, attempt: u32) {
        let mut inner = self.inner.write();
        inner.data = None;
        inner.state = LoadState::Running { attempt };
        inner.attempts = attempt;
    }

    /// Atomically publish a complete build.
    pub(crate) fn publish(&self, data: GameData) {
        let mut inner = self.inner.write();
        inner.data = Some(Arc::new(data));
        inner.state = LoadState::Ready;
    }

    /// Drop whatever a failed attempt left behind.
    pub(crate) fn reject(&self) {
        let mut inner = self.inner.write();
        inner.data = None;
        inner.state = LoadState::Failed;
    }
}
