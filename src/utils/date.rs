use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM` month selector; `None` means the current month.
pub fn parse_month(input: Option<&String>) -> AppResult<(i32, u32)> {
    match input {
        None => {
            let t = today();
            Ok((t.year(), t.month()))
        }
        Some(s) => {
            // Riusa il parser di data completandolo col primo del mese
            let d = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
                .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
            Ok((d.year(), d.month()))
        }
    }
}

/// Human label for a (year, month) pair, e.g. "June 2025".
pub fn month_label(year: i32, month: u32) -> String {
    let name = match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    };
    format!("{} {}", name, year)
}
