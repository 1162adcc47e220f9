mod load;
mod render;

use std::process::ExitCode;

use ferrobundle_core::{FetcherConfig, LoadOutcome};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Exit code for a bundle that was not rendered.
const NOT_RENDERED: u8 = 3;

pub async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let outcome = match &cli.command {
        Command::Load(args) => {
            let config = FetcherConfig::new(&cli.base_url)?.with_timeout_ms(cli.timeout_ms)?;
            load::run(args, config).await?
        }
        Command::Render(args) => render::run(args)?,
    };

    Ok(ExitCode::from(exit_status(outcome)))
}

fn exit_status(outcome: LoadOutcome) -> u8 {
    if outcome.is_rendered() {
        0
    } else {
        NOT_RENDERED
    }
}
