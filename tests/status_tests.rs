use chrono::{Local, NaiveDate, TimeZone};
use rattendance::core::status::derive_status;
use rattendance::models::coordinates::Coordinates;
use rattendance::models::record::AttendanceRecord;

fn record_on(day: NaiveDate, hour: u32, open: bool) -> AttendanceRecord {
    let check_in = Local
        .from_local_datetime(&day.and_hms_opt(hour, 0, 0).unwrap())
        .unwrap()
        .timestamp_nanos_opt()
        .unwrap();
    AttendanceRecord {
        check_in_time: check_in,
        check_out_time: if open {
            None
        } else {
            Some(check_in + 3_600_000_000_000)
        },
        location: Coordinates {
            latitude: 45.0,
            longitude: 9.0,
        },
    }
}

#[test]
fn no_records_means_not_checked_in() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let status = derive_status(&[], today);
    assert!(!status.is_checked_in);
    assert!(status.last_record.is_none());
}

#[test]
fn open_record_today_means_checked_in() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let records = vec![record_on(today, 8, false), record_on(today, 14, true)];
    let status = derive_status(&records, today);
    assert!(status.is_checked_in);
}

#[test]
fn last_record_of_the_day_wins() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let records = vec![record_on(today, 8, true), record_on(today, 14, false)];
    let status = derive_status(&records, today);
    // La sessione delle 14 è chiusa: non risultiamo più presenti
    assert!(!status.is_checked_in);
}

#[test]
fn yesterdays_open_record_does_not_count() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let yesterday = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
    let records = vec![record_on(yesterday, 8, true)];
    let status = derive_status(&records, today);
    assert!(!status.is_checked_in);
    assert!(status.last_record.is_none());
}

#[test]
fn closed_record_today_means_checked_out() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let records = vec![record_on(today, 8, false)];
    let status = derive_status(&records, today);
    assert!(!status.is_checked_in);
    assert!(status.last_record.is_some());
}
