use clap::Parser;
use std::path::{Path, PathBuf};

/// Configuration surface the copy engine depends on. Implemented by
/// [`CliConfig`] and by plain structs in tests.
pub trait CopyConfig: Send + Sync {
    fn source(&self) -> &Path;
    fn destination(&self) -> &Path;
    fn remove_partial(&self) -> bool;
}

#[derive(Debug, Clone, Parser)]
#[command(name = "linecp")]
#[command(about = "Copy a file line by line; the source must exist and the destination must not")]
pub struct CliConfig {
    /// Source file path (1st parameter)
    pub source: Option<PathBuf>,

    /// Destination file path (2nd parameter)
    pub dest: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        help = "Exit non-zero on validation failures instead of the legacy status 0"
    )]
    pub strict_exit: bool,

    #[arg(long, help = "Remove the partial destination file if the copy fails midway")]
    pub remove_partial: bool,
}

impl CopyConfig for CliConfig {
    fn source(&self) -> &Path {
        // validate() guarantees both paths are present before the engine runs
        self.source.as_deref().unwrap_or_else(|| Path::new(""))
    }

    fn destination(&self) -> &Path {
        self.dest.as_deref().unwrap_or_else(|| Path::new(""))
    }

    fn remove_partial(&self) -> bool {
        self.remove_partial
    }
}
