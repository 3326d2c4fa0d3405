//! Replay of queued attendance actions.
//!
//! The coordinator drains the durable queue through the backend, one
//! action at a time, in enqueue order. Each success is acknowledged by
//! truncating the front of the store before the next submission, so a
//! failure (or a crash) leaves exactly the unsubmitted suffix queued.
//! The first failure aborts the rest of the batch; replay errors are
//! logged, never propagated.

use crate::db::cache;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::action::{ActionKind, PendingAction};
use crate::queue::QueueStore;
use crate::remote::Backend;
use crate::ui::messages::warning;
use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainState {
    Idle,
    Draining,
    Done,
}

/// Outcome of one drain pass, for display and tests.
#[derive(Debug, Clone)]
pub struct DrainReport {
    pub attempted: usize,
    pub submitted: usize,
    pub error: Option<String>,
}

impl DrainReport {
    fn noop() -> Self {
        Self {
            attempted: 0,
            submitted: 0,
            error: None,
        }
    }

    pub fn fully_drained(&self) -> bool {
        self.error.is_none() && self.submitted == self.attempted
    }
}

pub struct ReplayCoordinator {
    state: DrainState,
}

impl Default for ReplayCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplayCoordinator {
    pub fn new() -> Self {
        Self {
            state: DrainState::Idle,
        }
    }

    pub fn state(&self) -> DrainState {
        self.state
    }

    pub fn is_draining(&self) -> bool {
        self.state == DrainState::Draining
    }

    /// Attempt one drain pass.
    ///
    /// Entered only when online and not already draining; an empty queue
    /// is a no-op (no remote calls, `last_sync_time` untouched).
    pub fn drain(
        &mut self,
        backend: &dyn Backend,
        pool: &mut DbPool,
        store: &QueueStore,
        is_online: bool,
    ) -> DrainReport {
        if !is_online || self.is_draining() {
            return DrainReport::noop();
        }

        let queue = store.read_all();
        if queue.is_empty() {
            return DrainReport::noop();
        }

        self.state = DrainState::Draining;

        let attempted = queue.len();
        let mut submitted = 0usize;
        let mut error: Option<String> = None;

        for action in &queue {
            match submit_one(backend, action) {
                Ok(()) => {
                    // Ack: l'azione inviata esce subito dallo store
                    store.truncate_front(1);
                    submitted += 1;
                }
                Err(e) => {
                    warning(format!(
                        "Sync stopped at {} ({} of {}): {}",
                        action.kind.as_str(),
                        submitted + 1,
                        attempted,
                        e
                    ));
                    let _ = ttlog(
                        &pool.conn,
                        "sync",
                        action.kind.as_str(),
                        &format!("Replay aborted after {} of {}: {}", submitted, attempted, e),
                    );
                    error = Some(e.to_string());
                    break;
                }
            }
        }

        if error.is_none() {
            if let Err(e) = self.finish_success(pool, submitted) {
                eprintln!("⚠️ Failed to record sync completion: {}", e);
            }
            self.state = DrainState::Done;
        }

        self.state = DrainState::Idle;

        DrainReport {
            attempted,
            submitted,
            error,
        }
    }

    /// Full success: stamp `last_sync_time` and invalidate the cached
    /// read state, exactly like a live submission does.
    fn finish_success(&self, pool: &mut DbPool, submitted: usize) -> AppResult<()> {
        cache::set_meta(pool, cache::LAST_SYNC_TIME, &Local::now().to_rfc3339())?;
        cache::invalidate(pool, &cache::READ_KEYS)?;
        ttlog(
            &pool.conn,
            "sync",
            "",
            &format!("Replayed {} queued action(s)", submitted),
        )?;
        Ok(())
    }
}

fn submit_one(backend: &dyn Backend, action: &PendingAction) -> AppResult<()> {
    match action.kind {
        ActionKind::CheckIn => {
            let coords = action.payload.ok_or_else(|| {
                AppError::Other("queued check-in has no coordinates".to_string())
            })?;
            backend.check_in(coords.latitude, coords.longitude)
        }
        ActionKind::CheckOut => backend.check_out(),
    }
}
