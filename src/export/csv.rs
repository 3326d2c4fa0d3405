use crate::models::record::AttendanceRecord;
use csv::Writer;

/// Scrive i record di presenza in CSV nel file indicato.
pub fn write_csv(path: &str, records: &[AttendanceRecord]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["check_in", "check_out", "latitude", "longitude"])?;

    for rec in records {
        wtr.write_record(&[
            rec.check_in_local().to_rfc3339(),
            rec.check_out_local()
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            rec.location.latitude.to_string(),
            rec.location.longitude.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
