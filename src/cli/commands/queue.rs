use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::queue::QueueStore;
use crate::ui::messages::success;
use crate::utils::table::Table;
use chrono::{DateTime, Local};

/// Inspect or clear the offline action queue.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Queue { print, clear } = cmd {
        let store = QueueStore::new(&cfg.queue_file);

        if *print {
            let actions = store.read_all();

            println!("📦 Offline queue ({} pending):\n", actions.len());

            if actions.is_empty() {
                println!("(empty)");
            } else {
                let mut table = Table::new(&["#", "Action", "Position", "Enqueued"]);
                for (i, action) in actions.iter().enumerate() {
                    let position = action
                        .payload
                        .map(|c| c.display())
                        .unwrap_or_else(|| "-".to_string());
                    let enqueued = DateTime::<chrono::Utc>::from_timestamp_millis(
                        action.enqueued_at,
                    )
                    .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| action.enqueued_at.to_string());
                    table.add_row(vec![
                        (i + 1).to_string(),
                        action.kind.as_str().to_string(),
                        position,
                        enqueued,
                    ]);
                }
                table.print();
            }
        }

        if *clear {
            let n = store.len();
            store.clear();

            // Log non bloccante, il DB può anche non esserci
            if let Ok(pool) = DbPool::new(&cfg.database) {
                let _ = ttlog(
                    &pool.conn,
                    "queue",
                    "clear",
                    &format!("Dropped {} queued action(s)", n),
                );
            }

            success(format!("Cleared {} queued action(s).", n));
        }
    }

    Ok(())
}
