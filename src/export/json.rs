use crate::models::record::AttendanceRecord;

/// Scrive i record di presenza in JSON formattato.
pub fn write_json(path: &str, records: &[AttendanceRecord]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
