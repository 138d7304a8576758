//! High-level command orchestration for the CLI.
//!
//! This module contains the handler for each thing `gitrc` can do: list,
//! create, delete and switch profiles, plus first-run setup.
//! It serves as the coordination layer, interacting with:
//! - `crate::ui` for output.
//! - `crate::init` for bootstrapping the profiles directory.
//! - `crate::profiles` for profile management logic.
//! - `crate::switch` for profile activation logic.
//!
//! Each function here corresponds to one `Action` in `main.rs`.

use anstyle::AnsiColor;
use anyhow::Result;
use std::path::Path;

use crate::init::{DEFAULT_PROFILE, StoreStatus, ensure_store};
use crate::paths::Paths;
use crate::profiles::{create_profile, delete_profile, list_profiles};
use crate::switch::{SwitchOutcome, active_profile, switch_to_profile};
use crate::ui::Ui;

/// Prepare the profiles directory.
///
/// Returns `true` when this run bootstrapped it, in which case the caller
/// should stop.
pub fn init(paths: &Paths, ui: &Ui) -> Result<bool> {
    let status = ensure_store(paths)?;

    let StoreStatus::Bootstrapped { adopted, switch } = status else {
        return Ok(false);
    };

    ui.info("Initialising gitrc!");
    ui.info(format!("Created directory: {}", paths.profiles_dir.display()));
    if adopted {
        ui.info(format!(
            "Made {} the default .gitconfig file",
            paths.active_link.display()
        ));
    }
    report_switch(paths, DEFAULT_PROFILE, &switch, ui);

    Ok(true)
}

/// List all available profiles
pub fn list(paths: &Paths, ui: &Ui) -> Result<()> {
    let profiles = list_profiles(paths)?;
    let active = active_profile(paths)?;

    ui.section("Available .gitconfig files:");
    ui.newline();

    if profiles.is_empty() {
        ui.println(ui.dim("  (none)"));
        ui.newline();
        ui.println("Create one with:");
        ui.println(format!("  {} -n <name>", ui.bold("gitrc")));
        return Ok(());
    }

    for line in profile_lines(&profiles, active.as_deref(), ui) {
        ui.println(line);
    }

    Ok(())
}

/// One row per profile, with the active one marked by `>`
fn profile_lines(profiles: &[String], active: Option<&str>, ui: &Ui) -> Vec<String> {
    profiles
        .iter()
        .map(|name| {
            if active == Some(name.as_str()) {
                format!(" {} {}", ui.colored(">", AnsiColor::Green), ui.bold(name))
            } else {
                format!("   {}", name)
            }
        })
        .collect()
}

/// Create a new empty profile
pub fn create(paths: &Paths, name: Option<&str>, ui: &Ui) -> Result<()> {
    let name = name.unwrap_or_default();
    let path = create_profile(paths, name)?;

    ui.ok(format!("Created .gitconfig file \"{}\" ({})", name, path.display()));
    ui.newline();
    ui.println("To activate it:");
    ui.println(format!("  gitrc {}", name));

    Ok(())
}

/// Delete a profile, clearing the active link if it pointed there
pub fn delete(paths: &Paths, name: Option<&str>, ui: &Ui) -> Result<()> {
    let name = name.unwrap_or_default();
    let outcome = delete_profile(paths, name)?;

    ui.ok(format!("Deleted .gitconfig file \"{}\"", name));
    if outcome.was_active {
        ui.warn("Current active config was deleted.");
        ui.warn("Remember to set a new one before use.");
    }

    Ok(())
}

/// Switch to a profile
pub fn use_profile(paths: &Paths, name: &str, ui: &Ui) -> Result<()> {
    let outcome = switch_to_profile(paths, name)?;
    report_switch(paths, name, &outcome, ui);
    Ok(())
}

fn report_switch(paths: &Paths, name: &str, outcome: &SwitchOutcome, ui: &Ui) {
    match outcome {
        SwitchOutcome::AlreadyActive => ui.ok(format!(
            "Current .gitconfig ({}) is already \"{}\" ({})",
            paths.active_link.display(),
            name,
            paths.profile(name).display()
        )),
        SwitchOutcome::Switched { previous } => {
            if let Some(previous) = previous {
                ui.info(format!("Replacing old .gitconfig ({})", display_name(previous)));
            }
            ui.ok(format!("Activated .gitconfig: \"{}\"", name));
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
