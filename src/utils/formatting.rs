//! Formatting utilities used for CLI and export outputs.

use crate::models::record::AttendanceRecord;

/// Restituisce una descrizione testuale e un colore ANSI per il ruolo.
pub fn describe_role(code: &str) -> (String, &'static str) {
    match code.to_lowercase().as_str() {
        "admin" => ("Administrator".into(), "\x1b[33m"),
        "user" => ("Employee".into(), "\x1b[34m"),
        "guest" => ("Guest".into(), "\x1b[90m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}

/// "HH:MM" local time of a record's check-in.
pub fn check_in_time(record: &AttendanceRecord) -> String {
    record.check_in_local().format("%H:%M").to_string()
}

/// "HH:MM" local time of a record's check-out, "-" while still open.
pub fn check_out_time(record: &AttendanceRecord) -> String {
    match record.check_out_local() {
        Some(t) => t.format("%H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// "Xh YYm" worked duration for a closed record, "-" while open.
pub fn worked_duration(record: &AttendanceRecord) -> String {
    match record.check_out_local() {
        Some(out) => {
            let mins = (out - record.check_in_local()).num_minutes().max(0);
            format!("{}h {:02}m", mins / 60, mins % 60)
        }
        None => "-".to_string(),
    }
}
