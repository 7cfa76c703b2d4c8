//! Sign-out session teardown.
//!
//! Clearing client state is expressed over injected [`StorageClearer`]
//! capabilities instead of reaching for global storage. A
//! [`SessionTeardown`] runs at most once: the first [`run`] clears every
//! store it is handed, later calls do nothing and report
//! [`TeardownOutcome::AlreadyTornDown`].
//!
//! [`run`]: SessionTeardown::run

use serde::Serialize;

/// Something that holds session state and can wipe it.
pub trait StorageClearer {
    /// Short name for logs and outcome reports (e.g. `"cookies"`).
    fn name(&self) -> &'static str;

    /// Remove every entry, returning how many were removed.
    fn clear(&mut self) -> usize;
}

/// What one clearer removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClearedStore {
    pub store: &'static str,
    pub removed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeardownOutcome {
    Cleared(Vec<ClearedStore>),
    AlreadyTornDown,
}

impl TeardownOutcome {
    /// Total entries removed across all stores; zero for a repeated call.
    pub fn removed(&self) -> usize {
        match self {
            TeardownOutcome::Cleared(stores) => stores.iter().map(|s| s.removed).sum(),
            TeardownOutcome::AlreadyTornDown => 0,
        }
    }
}

/// One-shot teardown of a session's client-side state.
#[derive(Debug, Default)]
pub struct SessionTeardown {
    done: bool,
}

impl SessionTeardown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Clear every store in order. Only the first call has any effect.
    pub fn run(&mut self, clearers: &mut [&mut dyn StorageClearer]) -> TeardownOutcome {
        if self.done {
            return TeardownOutcome::AlreadyTornDown;
        }
        self.done = true;

        let cleared = clearers
            .iter_mut()
            .map(|clearer| ClearedStore {
                store: clearer.name(),
                removed: clearer.clear(),
            })
            .collect();
        TeardownOutcome::Cleared(cleared)
    }
}
