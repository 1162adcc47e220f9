//! Render targets for the CLI: a page element on disk, or a fragment
//! buffered in memory and written to a file or stdout once rendered.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use ferrobundle_core::{DisplayRegion, MemoryRegion, PageRegion};

use crate::cli::TargetArgs;
use crate::error::CliError;

pub enum Target {
    Page(PageRegion),
    Fragment {
        region: MemoryRegion,
        out: Option<PathBuf>,
    },
}

impl Target {
    /// Resolve the target before any work is done, so a missing page
    /// element fails the command up front.
    pub fn open(args: &TargetArgs) -> Result<Self, CliError> {
        match &args.page {
            Some(page) => Ok(Self::Page(PageRegion::open(page, args.region_id.as_str())?)),
            None => Ok(Self::Fragment {
                region: MemoryRegion::new(args.region_id.as_str())?,
                out: args.out.clone(),
            }),
        }
    }

    pub fn region(&self) -> &dyn DisplayRegion {
        match self {
            Self::Page(region) => region,
            Self::Fragment { region, .. } => region,
        }
    }

    /// Emit the buffered fragment. Page targets were already written in place.
    pub fn finish(self) -> Result<(), CliError> {
        match self {
            Self::Page(region) => {
                tracing::info!(page = %region.path().display(), "page updated");
                Ok(())
            }
            Self::Fragment { region, out: Some(path) } => {
                fs::write(&path, region.content())?;
                tracing::info!(out = %path.display(), "fragment written");
                Ok(())
            }
            Self::Fragment { region, out: None } => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(region.content().as_bytes())?;
                handle.flush()?;
                Ok(())
            }
        }
    }
}
