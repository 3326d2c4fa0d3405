//! Connectivity monitoring and sync orchestration.
//!
//! One object owns the whole sync-side state the UI shows: whether the
//! backend is reachable, how many actions are waiting, whether a replay
//! pass is running, and when the last one fully succeeded. The watch
//! loop refreshes the pending count every tick, even while offline, so
//! queue growth stays visible, and announces offline->online
//! transitions before attempting a drain.

use crate::core::replay::{DrainReport, ReplayCoordinator};
use crate::db::cache;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::queue::QueueStore;
use crate::remote::Backend;
use crate::ui::messages::{info, success, warning};
use std::thread;
use std::time::Duration;

pub struct SyncMonitor {
    pub is_online: bool,
    pub pending_count: usize,
    pub last_sync_time: Option<String>,
    coordinator: ReplayCoordinator,
}

impl SyncMonitor {
    pub fn new(pool: &mut DbPool) -> AppResult<Self> {
        let last_sync_time = cache::get_meta(pool, cache::LAST_SYNC_TIME)?;
        Ok(Self {
            is_online: false,
            pending_count: 0,
            last_sync_time,
            coordinator: ReplayCoordinator::new(),
        })
    }

    pub fn is_syncing(&self) -> bool {
        self.coordinator.is_draining()
    }

    /// Probe the backend health endpoint and update `is_online`.
    /// Returns true on an offline→online transition.
    pub fn probe(&mut self, backend: &dyn Backend) -> bool {
        let was_online = self.is_online;
        self.is_online = backend.ping();
        self.is_online && !was_online
    }

    pub fn refresh_pending(&mut self, store: &QueueStore) {
        self.pending_count = store.len();
    }

    /// One replay attempt under the monitor's guards.
    pub fn try_drain(
        &mut self,
        backend: &dyn Backend,
        pool: &mut DbPool,
        store: &QueueStore,
    ) -> DrainReport {
        let report = self
            .coordinator
            .drain(backend, pool, store, self.is_online);
        self.refresh_pending(store);
        if report.fully_drained() && report.attempted > 0 {
            self.last_sync_time = cache::get_meta(pool, cache::LAST_SYNC_TIME).unwrap_or(None);
        }
        report
    }

    /// One-shot sync: probe, then drain if reachable.
    pub fn sync_once(
        &mut self,
        backend: &dyn Backend,
        pool: &mut DbPool,
        store: &QueueStore,
    ) -> DrainReport {
        self.probe(backend);
        self.refresh_pending(store);

        if !self.is_online {
            warning("Backend unreachable: queued actions kept for later.");
            return DrainReport {
                attempted: 0,
                submitted: 0,
                error: None,
            };
        }

        if self.pending_count == 0 {
            info("Nothing to sync.");
            return DrainReport {
                attempted: 0,
                submitted: 0,
                error: None,
            };
        }

        let report = self.try_drain(backend, pool, store);
        if report.fully_drained() && report.attempted > 0 {
            success(format!("Synced {} queued action(s).", report.submitted));
        }
        report
    }

    /// Watch loop: poll connectivity and queue size on a fixed interval,
    /// replaying whenever the backend is reachable and work is pending.
    /// Runs until the process is terminated; an in-flight drain is never
    /// cancelled.
    pub fn watch(
        &mut self,
        backend: &dyn Backend,
        pool: &mut DbPool,
        store: &QueueStore,
        interval_secs: u64,
    ) -> AppResult<()> {
        info(format!(
            "Watching for connectivity every {}s (Ctrl-C to stop)…",
            interval_secs
        ));

        loop {
            let came_online = self.probe(backend);
            self.refresh_pending(store);

            if came_online {
                info(format!(
                    "Backend reachable again, {} action(s) pending.",
                    self.pending_count
                ));
            }

            if self.is_online && self.pending_count > 0 {
                let report = self.try_drain(backend, pool, store);
                if report.fully_drained() && report.attempted > 0 {
                    success(format!("Synced {} queued action(s).", report.submitted));
                }
            }

            thread::sleep(Duration::from_secs(interval_secs));
        }
    }
}
