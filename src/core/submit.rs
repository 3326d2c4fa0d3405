//! Immediate submission of user-initiated attendance actions.
//!
//! Every action tries the backend right away. A success invalidates the
//! cached status/history so the next read refetches. Any failure
//! (transport or application-level, indistinguishable here)
//! queues the same action for replay and is still returned to the caller
//! so the CLI can surface it. Both effects always happen.

use crate::db::cache;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::action::PendingAction;
use crate::models::coordinates::Coordinates;
use crate::queue::QueueStore;
use crate::remote::Backend;

pub struct SubmitLogic;

impl SubmitLogic {
    pub fn check_in(
        backend: &dyn Backend,
        pool: &mut DbPool,
        store: &QueueStore,
        coordinates: Coordinates,
    ) -> AppResult<()> {
        match backend.check_in(coordinates.latitude, coordinates.longitude) {
            Ok(()) => {
                cache::invalidate(pool, &cache::READ_KEYS)?;
                if let Err(e) = ttlog(
                    &pool.conn,
                    "check-in",
                    "",
                    &format!("Checked in at {}", coordinates.display()),
                ) {
                    eprintln!("⚠️ Failed to write internal log: {}", e);
                }
                Ok(())
            }
            Err(e) => {
                store.append(PendingAction::check_in(coordinates));
                let _ = ttlog(
                    &pool.conn,
                    "queue",
                    "check-in",
                    &format!("Check-in failed, queued for replay: {}", e),
                );
                Err(e)
            }
        }
    }

    pub fn check_out(
        backend: &dyn Backend,
        pool: &mut DbPool,
        store: &QueueStore,
    ) -> AppResult<()> {
        match backend.check_out() {
            Ok(()) => {
                cache::invalidate(pool, &cache::READ_KEYS)?;
                if let Err(e) = ttlog(&pool.conn, "check-out", "", "Checked out") {
                    eprintln!("⚠️ Failed to write internal log: {}", e);
                }
                Ok(())
            }
            Err(e) => {
                store.append(PendingAction::check_out());
                let _ = ttlog(
                    &pool.conn,
                    "queue",
                    "check-out",
                    &format!("Check-out failed, queued for replay: {}", e),
                );
                Err(e)
            }
        }
    }
}
