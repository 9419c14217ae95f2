use mybatis_condition_cli::argparse::parse_args;
use mybatis_condition_cli::{commands, logger};

fn main() -> anyhow::Result<()> {
    let cli = parse_args();
    logger::init_logger(cli.verbose);

    let stdout = std::io::stdout();
    commands::handle_command(cli, &mut stdout.lock())
}
