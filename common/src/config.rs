use std::path::PathBuf;

/// Runtime options resolved from the command line, shared across the CLI flow.
pub struct Config {
    /// Suppresses the ASCII banner.
    pub no_banner: bool,
    /// Save the JSON artifact and exit without interactive command generation.
    pub json_only: bool,
    /// Lowers the log filter to debug.
    pub verbose: bool,
    /// Counts `open|filtered` port states as closed instead of open.
    ///
    /// Aggressive scans report ambiguous states on ports that are in fact
    /// serving, so the default treats them as open.
    pub strict_open: bool,
    /// Directory that receives exported artifacts. Created if missing.
    pub output_dir: PathBuf,
}
