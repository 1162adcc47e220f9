use ferrobundle_core::{BundleFetcher, BundleId, FetcherConfig, LoadOutcome};

use crate::cli::LoadArgs;
use crate::error::CliError;
use crate::output::Target;

pub async fn run(args: &LoadArgs, config: FetcherConfig) -> Result<LoadOutcome, CliError> {
    let target = Target::open(&args.target)?;
    let fetcher = BundleFetcher::new(config);

    let outcome = fetcher
        .load_bundle(&BundleId::new(args.bundle_id.as_str()), target.region())
        .await;

    if outcome.is_rendered() {
        target.finish()?;
    }
    Ok(outcome)
}
