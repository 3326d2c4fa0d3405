//! Local read cache for backend payloads.
//!
//! Mirrors the query cache the views depend on: fetched status, history
//! and reports are stored as JSON under a query key and served back while
//! fresh. Successful submissions and drains invalidate the keys their
//! views read so the next access refetches.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::{DateTime, Local};
use rusqlite::{OptionalExtension, params};

/// Query keys invalidated by every successful attendance action.
pub const CURRENT_STATUS: &str = "current_status";
pub const ATTENDANCE_HISTORY: &str = "attendance_history";
pub const READ_KEYS: [&str; 2] = [CURRENT_STATUS, ATTENDANCE_HISTORY];

pub fn monthly_report_key(principal: &str, year: i32, month: u32) -> String {
    format!("monthly_report:{}:{:04}-{:02}", principal, year, month)
}

/// Store a payload under `key`, stamping it with the current time.
pub fn put(pool: &mut DbPool, key: &str, payload: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    pool.conn.execute(
        "INSERT INTO cache (key, payload, fetched_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET payload = ?2, fetched_at = ?3",
        params![key, payload, now],
    )?;
    Ok(())
}

/// Return the payload for `key` if it was fetched within `ttl_secs`.
pub fn get_fresh(pool: &mut DbPool, key: &str, ttl_secs: u64) -> AppResult<Option<String>> {
    let row: Option<(String, String)> = pool
        .conn
        .query_row(
            "SELECT payload, fetched_at FROM cache WHERE key = ?1",
            [key],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let Some((payload, fetched_at)) = row else {
        return Ok(None);
    };

    // Entry con timestamp illeggibile → trattata come scaduta
    let Ok(fetched) = DateTime::parse_from_rfc3339(&fetched_at) else {
        return Ok(None);
    };

    let age = Local::now().signed_duration_since(fetched);
    if age.num_seconds() >= 0 && (age.num_seconds() as u64) < ttl_secs {
        Ok(Some(payload))
    } else {
        Ok(None)
    }
}

/// Drop the given keys so dependent views refetch.
pub fn invalidate(pool: &mut DbPool, keys: &[&str]) -> AppResult<()> {
    for key in keys {
        pool.conn
            .execute("DELETE FROM cache WHERE key = ?1", [key])?;
    }
    Ok(())
}

// ---------------------------
// meta: single persisted values
// ---------------------------

pub const LAST_SYNC_TIME: &str = "last_sync_time";

pub fn set_meta(pool: &mut DbPool, key: &str, value: &str) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO meta (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = ?2",
        params![key, value],
    )?;
    Ok(())
}

pub fn get_meta(pool: &mut DbPool, key: &str) -> AppResult<Option<String>> {
    let value: Option<String> = pool
        .conn
        .query_row("SELECT value FROM meta WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}
