use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::remote::{Backend, HttpBackend};
use crate::ui::messages::success;

/// Register the caller as an employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register { name, email } = cmd {
        let backend = HttpBackend::from_config(cfg)?;
        backend.register_employee(name, email)?;
        success(format!("Registered as {} <{}>", name, email));
    }

    Ok(())
}
