use crate::argparse::GenerateArgs;
use crate::source::load_fields;
use anyhow::{Context, Result};
use log::{debug, info};
use mybatis_condition::{ConditionForm, Settings};
use std::io::Write;
use std::path::Path;

pub fn handle_generate_command(args: GenerateArgs, settings_path: &Path, out: &mut dyn Write) -> Result<()> {
    let (class_name, fields) = load_fields(&args.source)?;

    let dialect = match args.dialect {
        Some(dialect) => dialect,
        None => {
            Settings::load(settings_path)
                .with_context(|| format!("Failed to read settings {}", settings_path.display()))?
                .dialect
        }
    };
    debug!("Generating {} with dialect {}", class_name, dialect);

    let mut form = ConditionForm::new(fields);
    form.set_table_alias(args.alias)
        .set_param_prefix(args.prefix)
        .set_dialect(dialect);
    for (field, operator) in args.operators {
        form.select_operator(&field, operator)
            .with_context(|| format!("Cannot set operator of {} on {}", field, class_name))?;
    }

    let conditions = form.render();
    match args.output {
        Some(path) => {
            std::fs::write(&path, &conditions)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote conditions for {} to {}", class_name, path.display());
        }
        None => out.write_all(conditions.as_bytes())?,
    }
    Ok(())
}
