use clap::Parser;
use standalone_cli::cli::{Cli, Command};
use standalone_cli::error::cli_error_to_miette;
use standalone_cli::{commands, logger, ui};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    logger::init_logger(cli.verbose, cli.quiet, cli.no_color);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }
    ui::init_colors();

    let result = match cli.command {
        Command::Build(args) => commands::build::execute(args).await,
        Command::Create(args) => commands::create::execute(args).await,
    };

    result.map_err(cli_error_to_miette)
}
