use crate::argparse::SourceArgs;
use crate::source::load_fields;
use anyhow::Result;
use std::io::Write;

pub fn handle_fields_command(args: SourceArgs, out: &mut dyn Write) -> Result<()> {
    let (class_name, fields) = load_fields(&args)?;
    writeln!(out, "{} ({} fields)", class_name, fields.len())?;

    let name_width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    for field in &fields {
        let offered = field
            .kind
            .offered_operators()
            .iter()
            .map(|op| op.label())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "  {:<name_width$}  {:<19}  {} (default {})",
            field.name,
            field.kind.as_str(),
            offered,
            field.kind.default_operator(),
            name_width = name_width
        )?;
    }
    Ok(())
}
