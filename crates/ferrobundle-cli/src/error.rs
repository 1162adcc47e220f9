use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
///
/// A bundle that was fetched but not rendered is not an error here; the
/// command reports it through exit code 3 after the diagnostic is logged.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ferrobundle_core::ValidationError),

    #[error(transparent)]
    Region(#[from] ferrobundle_core::RegionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Region(_) => 2,
            Self::Io(_) => 10,
        }
    }
}
