use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Principal, UserRole};
use crate::remote::{Backend, HttpBackend};
use crate::ui::messages::success;
use crate::utils::describe_role;

/// Assign a role to a user (admin only, enforced by the backend).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Assign { user, role } = cmd {
        let parsed_role = UserRole::from_code(role).ok_or_else(|| {
            AppError::InvalidRole(format!(
                "Invalid role '{}'. Use one of: admin, user, guest",
                role
            ))
        })?;

        let backend = HttpBackend::from_config(cfg)?;
        let target = Principal::from(user.as_str());

        backend.assign_role(&target, parsed_role)?;

        let (role_label, _) = describe_role(parsed_role.as_str());
        success(format!("Role {} assigned to {}", role_label, target));
    }

    Ok(())
}
