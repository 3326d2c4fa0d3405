use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::monitor::SyncMonitor;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::queue::QueueStore;
use crate::remote::HttpBackend;
use crate::ui::messages::info;

/// Replay queued attendance actions: one-shot by default, a polling
/// watch loop with --watch.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync { watch, interval } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let store = QueueStore::new(&cfg.queue_file);
        let backend = HttpBackend::from_config(cfg)?;

        let mut monitor = SyncMonitor::new(&mut pool)?;

        if *watch {
            let secs = interval.unwrap_or(cfg.sync_poll_secs).max(1);
            monitor.watch(&backend, &mut pool, &store, secs)?;
        } else {
            let report = monitor.sync_once(&backend, &mut pool, &store);
            if report.attempted > 0 {
                info(format!(
                    "{} submitted, {} still queued.",
                    report.submitted,
                    monitor.pending_count
                ));
            }
        }
    }

    Ok(())
}
