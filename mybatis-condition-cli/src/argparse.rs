use clap::{Args, Parser, Subcommand};
use mybatis_condition::{Dialect, Operator};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mybatis-condition",
    about = "Generate MyBatis <if> conditions from the fields of a class",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Settings file, defaults to the user config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the fields of a class with their kinds and operators
    Fields(SourceArgs),
    /// Generate the condition fragment
    Generate(GenerateArgs),
    /// Show or change persisted settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    /// JSON class descriptor
    #[arg(long, conflicts_with = "source", required_unless_present = "source")]
    pub descriptor: Option<PathBuf>,

    /// Directory of Rust sources to scan, used with --struct
    #[arg(long, requires = "struct_name")]
    pub source: Option<PathBuf>,

    /// Struct to read from --source, `Name` or `module::Name`
    #[arg(long = "struct", id = "struct_name", requires = "source")]
    pub struct_name: Option<String>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Table alias put in front of column names; empty for none
    #[arg(long, default_value = mybatis_condition::DEFAULT_TABLE_ALIAS)]
    pub alias: String,

    /// Parameter object prefix; empty for none
    #[arg(long, default_value = mybatis_condition::DEFAULT_PARAM_PREFIX)]
    pub prefix: String,

    /// mysql, postgresql or oracle; defaults to the persisted setting
    #[arg(long)]
    pub dialect: Option<Dialect>,

    /// Operator for one field, e.g. --op userName=LIKE --op age=">="
    #[arg(long = "op", value_name = "FIELD=OP", value_parser = parse_field_operator)]
    pub operators: Vec<(String, Operator)>,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the current settings
    Show,
    /// Persist the default dialect
    SetDialect {
        dialect: Dialect,
    },
}

pub fn parse_field_operator(value: &str) -> Result<(String, Operator), String> {
    let (field, op) = value
        .split_once('=')
        .filter(|(field, _)| !field.trim().is_empty())
        .ok_or_else(|| format!("expected FIELD=OP, got '{}'", value))?;
    let op = op.parse::<Operator>().map_err(|e| e.to_string())?;
    Ok((field.trim().to_string(), op))
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_field_operator() {
        assert_eq!(parse_field_operator("age=>=").unwrap(), ("age".to_string(), Operator::Gte));
        assert_eq!(parse_field_operator("name=like").unwrap(), ("name".to_string(), Operator::Like));
        assert_eq!(
            parse_field_operator("ids=NOT_IN").unwrap(),
            ("ids".to_string(), Operator::NotIn)
        );
        assert!(parse_field_operator("age").is_err());
        assert!(parse_field_operator("=EQ").is_err());
        assert!(parse_field_operator("age=~").is_err());
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["mybatis-condition", "generate", "--descriptor", "q.json"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.alias, "t");
                assert_eq!(args.prefix, "param");
                assert_eq!(args.dialect, None);
                assert!(args.operators.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_source_requires_struct() {
        assert!(Cli::try_parse_from(["mybatis-condition", "fields", "--source", "src"]).is_err());
        assert!(Cli::try_parse_from(["mybatis-condition", "fields"]).is_err());
        assert!(Cli::try_parse_from([
            "mybatis-condition",
            "fields",
            "--descriptor",
            "q.json",
            "--source",
            "src",
            "--struct",
            "Q"
        ])
        .is_err());
    }
}
