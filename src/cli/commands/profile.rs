use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::employee::UserProfile;
use crate::remote::{Backend, HttpBackend};
use crate::ui::messages::{success, warning};

/// Show or update the caller's user profile.
///
/// Without flags: print the stored profile. With --name/--email: save,
/// reusing the current values for fields left out.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile { name, email } = cmd {
        let backend = HttpBackend::from_config(cfg)?;

        let current = backend.caller_profile()?;

        // ---- SHOW ----
        if name.is_none() && email.is_none() {
            match current {
                Some(profile) => {
                    println!("👤 Name  : {}", profile.name);
                    println!("📧 Email : {}", profile.email);
                }
                None => {
                    warning("No profile stored yet. Set one with --name and --email.");
                }
            }
            return Ok(());
        }

        // ---- SAVE ----
        let merged = UserProfile {
            name: name
                .clone()
                .or_else(|| current.as_ref().map(|p| p.name.clone()))
                .unwrap_or_default(),
            email: email
                .clone()
                .or_else(|| current.as_ref().map(|p| p.email.clone()))
                .unwrap_or_default(),
        };

        backend.save_caller_profile(&merged)?;
        success(format!("Profile saved: {} <{}>", merged.name, merged.email));
    }

    Ok(())
}
