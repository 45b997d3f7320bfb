//! Goldbach CLI entry point

use anyhow::Result;
use goldbach::config::cli::Cli;
use goldbach::runner::{rejection_message, run};
use goldbach::util::logging::init_cli_logger;
use goldbach::InputValidationError;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_cli_logger(cli.verbose);

    match run(&cli) {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => match e.downcast_ref::<InputValidationError>() {
            Some(rejected) => {
                eprintln!("{}", rejection_message(rejected));
                std::process::exit(1)
            }
            None => Err(e),
        },
    }
}
