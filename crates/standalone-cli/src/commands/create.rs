//! Create command: scaffold a new standalone component.

use crate::cli::CreateArgs;
use crate::commands::{templates, utils};
use crate::component;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use inquire::{InquireError, Text};
use std::fs;
use tracing::debug;

pub async fn execute(args: CreateArgs) -> Result<()> {
    let root = utils::resolve_project_root()?;

    let name = match args.name {
        Some(name) => name,
        None => match Text::new("Component name:").prompt() {
            Ok(name) => name,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(())
            }
            Err(e) => return Err(e.into()),
        },
    };

    validate_name(&name)?;

    let component_dir = root.join(&args.source).join(&name);
    if component_dir.exists() {
        return Err(CliError::InvalidArgument(format!(
            "component '{}' already exists at {}",
            name,
            component_dir.display()
        )));
    }

    debug!(name, dir = %component_dir.display(), "scaffolding component");
    fs::create_dir_all(&component_dir).with_path(&component_dir)?;

    let svelte_file = format!("{}.svelte", templates::pascal_case(&name));
    fs::write(component_dir.join("embed.ts"), templates::entry_module(&name))
        .with_path(component_dir.join("embed.ts"))?;
    fs::write(
        component_dir.join(&svelte_file),
        templates::svelte_component(&name),
    )
    .with_path(component_dir.join(&svelte_file))?;

    ui::success(&format!(
        "Created component '{}' at {}",
        name,
        component_dir.display()
    ));
    ui::info(&format!(
        "Build it with: standalone build --source {}",
        args.source.display()
    ));

    Ok(())
}

/// Reject names that would not survive discovery or that escape the source
/// directory.
fn validate_name(name: &str) -> Result<()> {
    if component::normalize_name(name).is_none() {
        return Err(CliError::InvalidArgument(format!(
            "'{}' is not a valid component name",
            name
        )));
    }

    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(CliError::InvalidArgument(format!(
            "component name '{}' must not contain path separators",
            name
        )));
    }

    Ok(())
}
