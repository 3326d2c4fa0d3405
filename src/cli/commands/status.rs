use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::cache;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::queue::QueueStore;
use crate::remote::{Backend, HttpBackend};
use crate::ui::messages::info;
use crate::utils::formatting;

/// Show today's attendance status.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { refresh } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let backend = HttpBackend::from_config(cfg)?;
        let caller = backend.whoami()?;

        let status = StatusLogic::current_status(&backend, &mut pool, cfg, &caller.principal, *refresh)?;

        println!("👤 {}", caller.principal);
        match &status.last_record {
            Some(record) if status.is_checked_in => {
                println!(
                    "🟢 Checked in since {} ({})",
                    formatting::check_in_time(record),
                    record.location.display()
                );
            }
            Some(record) => {
                println!(
                    "⚪ Checked out. Last session {} → {} ({})",
                    formatting::check_in_time(record),
                    formatting::check_out_time(record),
                    formatting::worked_duration(record)
                );
            }
            None => {
                println!("⚪ No attendance recorded today");
            }
        }

        // Stato della coda offline, sempre visibile
        let store = QueueStore::new(&cfg.queue_file);
        let pending = store.len();
        if pending > 0 {
            info(format!("{} action(s) waiting for sync", pending));
        }
        if let Some(last_sync) = cache::get_meta(&mut pool, cache::LAST_SYNC_TIME)? {
            println!("🕒 Last successful sync: {}", last_sync);
        }
    }

    Ok(())
}
