//! Cache-through reads of backend report data.

use crate::config::Config;
use crate::db::cache;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::employee::Principal;
use crate::models::record::AttendanceRecord;
use crate::remote::Backend;

pub struct ReportLogic;

impl ReportLogic {
    /// Monthly report for any employee, cached under a per-month key.
    pub fn monthly_report(
        backend: &dyn Backend,
        pool: &mut DbPool,
        cfg: &Config,
        employee: &Principal,
        year: i32,
        month: u32,
        refresh: bool,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let key = cache::monthly_report_key(employee.as_str(), year, month);

        if !refresh
            && let Some(payload) = cache::get_fresh(pool, &key, cfg.status_ttl_secs)?
            && let Ok(records) = serde_json::from_str::<Vec<AttendanceRecord>>(&payload)
        {
            return Ok(records);
        }

        let records = backend.monthly_report(employee, year, month)?;
        let payload = serde_json::to_string(&records)
            .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;
        cache::put(pool, &key, &payload)?;
        Ok(records)
    }

    /// Caller's current-month history, cached under the key the
    /// submit/replay paths invalidate.
    pub fn caller_history(
        backend: &dyn Backend,
        pool: &mut DbPool,
        cfg: &Config,
        caller: &Principal,
        year: i32,
        month: u32,
        refresh: bool,
    ) -> AppResult<Vec<AttendanceRecord>> {
        if !refresh
            && let Some(payload) =
                cache::get_fresh(pool, cache::ATTENDANCE_HISTORY, cfg.status_ttl_secs)?
            && let Ok(records) = serde_json::from_str::<Vec<AttendanceRecord>>(&payload)
        {
            return Ok(records);
        }

        let records = backend.monthly_report(caller, year, month)?;
        let payload = serde_json::to_string(&records)
            .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;
        cache::put(pool, cache::ATTENDANCE_HISTORY, &payload)?;
        Ok(records)
    }
}
