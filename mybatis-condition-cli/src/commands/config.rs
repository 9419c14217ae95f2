use crate::argparse::ConfigCommands;
use anyhow::{Context, Result};
use mybatis_condition::Settings;
use std::io::Write;
use std::path::Path;

pub fn handle_config_command(command: ConfigCommands, settings_path: &Path, out: &mut dyn Write) -> Result<()> {
    let mut settings = Settings::load(settings_path)
        .with_context(|| format!("Failed to read settings {}", settings_path.display()))?;

    match command {
        ConfigCommands::Show => {
            writeln!(out, "settings: {}", settings_path.display())?;
            writeln!(out, "dialect: {}", settings.dialect)?;
        }
        ConfigCommands::SetDialect { dialect } => {
            settings.dialect = dialect;
            settings
                .save(settings_path)
                .with_context(|| format!("Failed to save settings {}", settings_path.display()))?;
            writeln!(out, "dialect: {}", settings.dialect)?;
        }
    }
    Ok(())
}
