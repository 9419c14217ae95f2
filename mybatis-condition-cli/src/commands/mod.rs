mod config;
mod fields;
mod generate;

use crate::argparse::{Cli, Commands};
use anyhow::{Context, Result};
pub use config::handle_config_command;
pub use fields::handle_fields_command;
pub use generate::handle_generate_command;
use mybatis_condition::SETTINGS_FILE_NAME;
use std::io::Write;
use std::path::PathBuf;

/// `--config`, or `<config dir>/mybatis-condition/mybatis-condition.json`.
pub fn settings_path(cli_config: Option<PathBuf>) -> Result<PathBuf> {
    match cli_config {
        Some(path) => Ok(path),
        None => dirs::config_dir()
            .map(|dir| dir.join("mybatis-condition").join(SETTINGS_FILE_NAME))
            .context("Could not determine the user config directory. Use --config to specify a settings file."),
    }
}

pub fn handle_command(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Commands::Fields(args) => handle_fields_command(args, out),
        Commands::Generate(args) => handle_generate_command(args, &settings_path(cli.config)?, out),
        Commands::Config(command) => handle_config_command(command, &settings_path(cli.config)?, out),
    }
}
