use crate::config::Config;
use crate::errors::AppResult;
use crate::remote::{Backend, HttpBackend};
use crate::utils::describe_role;

/// Show the authenticated principal and role.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let backend = HttpBackend::from_config(cfg)?;
    let caller = backend.whoami()?;

    let (role_label, role_color) = describe_role(caller.role.as_str());

    println!("👤 Principal : {}", caller.principal);
    println!("🔑 Role      : {}{}\x1b[0m", role_color, role_label);

    Ok(())
}
