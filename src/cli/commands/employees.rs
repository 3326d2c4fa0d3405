use crate::config::Config;
use crate::errors::AppResult;
use crate::remote::{Backend, HttpBackend};
use crate::utils::table::Table;

/// List the employee directory (admin only, enforced by the backend).
pub fn handle(cfg: &Config) -> AppResult<()> {
    let backend = HttpBackend::from_config(cfg)?;
    let employees = backend.all_employees()?;

    println!("👥 Registered employees:\n");

    if employees.is_empty() {
        println!("No employees registered.");
        return Ok(());
    }

    let mut table = Table::new(&["Name", "Email", "Principal", "Admin"]);
    for e in &employees {
        table.add_row(vec![
            e.name.clone(),
            e.email.clone(),
            e.principal.to_string(),
            if e.is_admin { "yes".into() } else { "no".into() },
        ]);
    }
    table.print();

    println!("\n{} employee(s).", employees.len());
    Ok(())
}
