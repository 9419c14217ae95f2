use crate::argparse::SourceArgs;
use anyhow::{bail, Context, Result};
use log::debug;
use mybatis_condition::{ClassDescriptor, FieldDescriptor, FieldSource};
use mybatis_condition_build::find_struct;

/// Class name and fields selected by `--descriptor` or `--source/--struct`.
pub fn load_fields(args: &SourceArgs) -> Result<(String, Vec<FieldDescriptor>)> {
    if let Some(path) = &args.descriptor {
        let descriptor = ClassDescriptor::load(path)
            .with_context(|| format!("Failed to load class descriptor {}", path.display()))?;
        let name = descriptor
            .name
            .clone()
            .unwrap_or_else(|| path.display().to_string());
        debug!("Loaded {} field(s) of {} from descriptor", descriptor.fields.len(), name);
        return Ok((name, descriptor.fields()));
    }

    match (&args.source, &args.struct_name) {
        (Some(dir), Some(struct_name)) => {
            let found = find_struct(dir, struct_name)
                .with_context(|| format!("Failed to read struct {} from {}", struct_name, dir.display()))?;
            debug!(
                "Scanned {} field(s) of {} in {}",
                found.fields.len(),
                found.qualified_name(),
                found.file.display()
            );
            Ok((found.qualified_name(), found.fields()))
        }
        _ => bail!("Pass either --descriptor FILE or --source DIR --struct NAME"),
    }
}
