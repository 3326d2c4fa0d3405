use super::{ExportFormat, csv, fs_utils, json, notify_export_success};
use crate::errors::AppResult;
use crate::models::record::AttendanceRecord;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write a fetched report to disk in the requested format.
    pub fn export_records(
        records: &[AttendanceRecord],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        fs_utils::ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => {
                csv::write_csv(file, records)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                json::write_json(file, records)?;
                notify_export_success("JSON", path);
            }
        }

        Ok(())
    }
}
