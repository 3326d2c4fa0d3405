use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::employee::Principal;
use crate::remote::{Backend, HttpBackend};
use crate::utils::date::parse_month;

/// Export a monthly attendance report to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        employee,
        force,
    } = cmd
    {
        let (year, m) = parse_month(month.as_ref())?;

        let mut pool = DbPool::new(&cfg.database)?;
        let backend = HttpBackend::from_config(cfg)?;

        let subject = match employee {
            Some(p) => Principal::from(p.as_str()),
            None => backend.whoami()?.principal,
        };

        let records =
            ReportLogic::monthly_report(&backend, &mut pool, cfg, &subject, year, m, false)?;

        ExportLogic::export_records(&records, format, file, *force)?;
    }

    Ok(())
}
