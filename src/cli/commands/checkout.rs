use crate::config::Config;
use crate::core::submit::SubmitLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::queue::QueueStore;
use crate::remote::HttpBackend;
use crate::ui::messages::{success, warning};

/// Check out of the current attendance session.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let store = QueueStore::new(&cfg.queue_file);
    let backend = HttpBackend::from_config(cfg)?;

    match SubmitLogic::check_out(&backend, &mut pool, &store) {
        Ok(()) => {
            success("Checked out");
            Ok(())
        }
        Err(e) => {
            warning(format!(
                "Check-out not delivered, queued for replay ({} pending). Run 'rattendance sync' when back online.",
                store.len()
            ));
            Err(e)
        }
    }
}
