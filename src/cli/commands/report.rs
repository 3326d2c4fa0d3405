use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::employee::Principal;
use crate::remote::{Backend, HttpBackend};
use crate::utils::date::{month_label, parse_month};
use crate::utils::formatting;
use crate::utils::table::Table;

/// Show a monthly attendance report (own records, or any employee's for
/// admins; the backend enforces authorization).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        employee,
        month,
        refresh,
    } = cmd
    {
        let (year, m) = parse_month(month.as_ref())?;

        let mut pool = DbPool::new(&cfg.database)?;
        let backend = HttpBackend::from_config(cfg)?;

        let subject = match employee {
            Some(p) => Principal::from(p.as_str()),
            None => backend.whoami()?.principal,
        };

        let records = if employee.is_some() {
            ReportLogic::monthly_report(&backend, &mut pool, cfg, &subject, year, m, *refresh)?
        } else {
            ReportLogic::caller_history(&backend, &mut pool, cfg, &subject, year, m, *refresh)?
        };

        println!("📅 Attendance for {} ({}):\n", subject, month_label(year, m));

        if records.is_empty() {
            println!("No records for this month.");
            return Ok(());
        }

        let mut table = Table::new(&["Date", "In", "Out", "Worked", "Position"]);
        for rec in &records {
            table.add_row(vec![
                rec.day().format("%Y-%m-%d").to_string(),
                formatting::check_in_time(rec),
                formatting::check_out_time(rec),
                formatting::worked_duration(rec),
                rec.location.display(),
            ]);
        }
        table.print();

        println!("\n{} record(s).", records.len());
    }

    Ok(())
}
