//! Durable store for attendance actions that could not reach the backend.
//!
//! One JSON file holds the whole queue as an ordered array of
//! `{kind, payload, enqueuedAt}` records. Every write rewrites the file;
//! an internal mutex serializes read-modify-write cycles so an append
//! racing a drain inside the same process cannot lose records.
//!
//! Storage trouble is never allowed to break an attendance action:
//! unreadable or corrupt files read as an empty queue, and a failed
//! append is reported on stderr but not propagated.

use crate::models::action::PendingAction;
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub struct QueueStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl QueueStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one action to the end of the queue.
    ///
    /// Must not fail the caller: the action being queued is already the
    /// fallback path of a failed remote call.
    pub fn append(&self, action: PendingAction) {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut queue = self.load();
        queue.push(action);
        if let Err(e) = self.persist(&queue) {
            warning(format!(
                "Failed to persist offline queue ({}): {}",
                self.path.display(),
                e
            ));
        }
    }

    /// Read the whole queue in FIFO order. Corrupt or missing storage
    /// reads as empty.
    pub fn read_all(&self) -> Vec<PendingAction> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.load()
    }

    pub fn len(&self) -> usize {
        self.read_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove everything. Used by a fully acknowledged drain and by
    /// `queue --clear`.
    pub fn clear(&self) {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        if self.path.exists()
            && let Err(e) = fs::remove_file(&self.path)
        {
            warning(format!(
                "Failed to clear offline queue ({}): {}",
                self.path.display(),
                e
            ));
        }
    }

    /// Drop the oldest `n` actions, keeping anything appended meanwhile.
    /// Replay acknowledgement: called after each successful submission.
    pub fn truncate_front(&self, n: usize) {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let queue = self.load();
        let remaining: Vec<PendingAction> = queue.into_iter().skip(n).collect();
        if let Err(e) = self.persist(&remaining) {
            warning(format!(
                "Failed to persist offline queue ({}): {}",
                self.path.display(),
                e
            ));
        }
    }

    fn load(&self) -> Vec<PendingAction> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    fn persist(&self, queue: &[PendingAction]) -> std::io::Result<()> {
        let json = serde_json::to_string(queue).map_err(std::io::Error::other)?;
        fs::write(&self.path, json)
    }
}
