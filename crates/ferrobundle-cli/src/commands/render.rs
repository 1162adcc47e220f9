use std::fs;
use std::io::{self, Read};

use ferrobundle_core::diagnostics::{self, Diagnostics, TracingDiagnostics, BUNDLE_NOT_FOUND};
use ferrobundle_core::{display_bundle, BundlePayload, FetchError, LoadOutcome};

use crate::cli::RenderArgs;
use crate::error::CliError;
use crate::output::Target;

/// Offline counterpart of `load`: same error-marker rule and diagnostics,
/// with the payload read from a file or stdin.
pub fn run(args: &RenderArgs) -> Result<LoadOutcome, CliError> {
    run_with(args, &TracingDiagnostics)
}

fn run_with(args: &RenderArgs, sink: &dyn Diagnostics) -> Result<LoadOutcome, CliError> {
    let target = Target::open(&args.target)?;
    let body = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut body = String::new();
            io::stdin().lock().read_to_string(&mut body)?;
            body
        }
    };

    let bundle = match BundlePayload::from_json(&body) {
        Ok(BundlePayload::Bundle(bundle)) => bundle,
        Ok(BundlePayload::NotFound { .. }) => {
            sink.error(BUNDLE_NOT_FOUND);
            return Ok(LoadOutcome::NotFound);
        }
        Err(error) => {
            sink.error(&diagnostics::error_message(FetchError::Decode(error)));
            return Ok(LoadOutcome::Failed);
        }
    };

    if let Err(error) = display_bundle(&bundle, target.region()) {
        sink.error(&diagnostics::error_message(error));
        return Ok(LoadOutcome::Failed);
    }
    target.finish()?;

    Ok(LoadOutcome::Rendered {
        stock_count: bundle.stocks.len(),
    })
}
