use crate::config::CopyConfig;
use crate::core::copier::{self, CopyReport};
use crate::utils::error::Result;
use crate::utils::validation::{check_destination_absent, check_source_exists};
use std::fs;

pub struct CopyEngine<C: CopyConfig> {
    config: C,
}

impl<C: CopyConfig> CopyEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Runs the prechecks and the copy loop. The destination is only ever
    /// created after both checks pass; on a mid-copy failure the partial
    /// destination is removed when the config asks for it.
    pub fn run(&self) -> Result<CopyReport> {
        let source = self.config.source();
        let dest = self.config.destination();

        check_source_exists(source)?;
        check_destination_absent(source, dest)?;

        tracing::info!("copying {} -> {}", source.display(), dest.display());

        match copier::copy_lines(source, dest) {
            Ok(report) => {
                tracing::info!(
                    lines = report.lines,
                    bytes = report.bytes,
                    "copy finished"
                );
                Ok(report)
            }
            Err(e) => {
                tracing::error!("copy failed: {}", e);
                if self.config.remove_partial() {
                    self.remove_partial_destination();
                }
                Err(e)
            }
        }
    }

    fn remove_partial_destination(&self) {
        let dest = self.config.destination();
        if !dest.exists() {
            return;
        }
        match fs::remove_file(dest) {
            Ok(()) => tracing::info!("removed partial destination {}", dest.display()),
            // the original copy error stays the reported failure
            Err(e) => tracing::warn!(
                "could not remove partial destination {}: {}",
                dest.display(),
                e
            ),
        }
    }
}
