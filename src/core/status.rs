//! Current attendance status, derived from the caller's current-month
//! records: the last record of the local day decides whether the caller
//! is still checked in.

use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::cache;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Principal;
use crate::models::record::{AttendanceRecord, AttendanceStatus};
use crate::remote::Backend;
use chrono::{Datelike, Local, NaiveDate};

pub struct StatusLogic;

impl StatusLogic {
    /// Current status, served from cache while fresh.
    pub fn current_status(
        backend: &dyn Backend,
        pool: &mut DbPool,
        cfg: &Config,
        caller: &Principal,
        refresh: bool,
    ) -> AppResult<AttendanceStatus> {
        if !refresh
            && let Some(payload) =
                cache::get_fresh(pool, cache::CURRENT_STATUS, cfg.status_ttl_secs)?
            && let Ok(status) = serde_json::from_str::<AttendanceStatus>(&payload)
        {
            return Ok(status);
        }

        let today = Local::now().date_naive();
        let records = ReportLogic::caller_history(
            backend,
            pool,
            cfg,
            caller,
            today.year(),
            today.month(),
            refresh,
        )?;

        let status = derive_status(&records, today);
        let payload =
            serde_json::to_string(&status).map_err(|e| AppError::Other(e.to_string()))?;
        cache::put(pool, cache::CURRENT_STATUS, &payload)?;
        Ok(status)
    }
}

/// Last record of `today` wins; open record → checked in.
pub fn derive_status(records: &[AttendanceRecord], today: NaiveDate) -> AttendanceStatus {
    let last_today = records.iter().filter(|r| r.day() == today).next_back();

    match last_today {
        Some(record) => AttendanceStatus {
            is_checked_in: record.is_open(),
            last_record: Some(record.clone()),
        },
        None => AttendanceStatus {
            is_checked_in: false,
            last_record: None,
        },
    }
}
