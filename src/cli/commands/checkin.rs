use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::SubmitLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::coordinates::Coordinates;
use crate::queue::QueueStore;
use crate::remote::HttpBackend;
use crate::ui::messages::{success, warning};

/// Check in at the given position.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::CheckIn { lat, lon } = cmd {
        //
        // 1. Validate coordinates (mandatory)
        //
        let coordinates = Coordinates::new(*lat, *lon)?;

        //
        // 2. Open local storage and backend handle
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let store = QueueStore::new(&cfg.queue_file);
        let backend = HttpBackend::from_config(cfg)?;

        //
        // 3. Submit (queues on failure)
        //
        match SubmitLogic::check_in(&backend, &mut pool, &store, coordinates) {
            Ok(()) => {
                success(format!("Checked in at {}", coordinates.display()));
                Ok(())
            }
            Err(e) => {
                warning(format!(
                    "Check-in not delivered, queued for replay ({} pending). Run 'rattendance sync' when back online.",
                    store.len()
                ));
                Err(e)
            }
        }
    } else {
        Ok(())
    }
}
