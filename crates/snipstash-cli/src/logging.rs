// Logging and verbosity control

use tracing::Level;

/// Verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Quiet mode - errors only
    Quiet = 0,
    /// Normal mode - warnings and errors
    Normal = 1,
    /// Verbose mode - debug output
    Verbose = 2,
}

impl VerbosityLevel {
    /// Pick the level from the global CLI flags; quiet wins over verbose
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            VerbosityLevel::Quiet
        } else if verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }

    /// Most detailed tracing level shown at this verbosity
    pub fn max_level(&self) -> Level {
        match self {
            VerbosityLevel::Quiet => Level::ERROR,
            VerbosityLevel::Normal => Level::WARN,
            VerbosityLevel::Verbose => Level::DEBUG,
        }
    }
}

/// Initialize logging based on CLI flags.
///
/// Log lines go to stderr so command output on stdout stays clean. Calling
/// this twice keeps the first subscriber.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = VerbosityLevel::from_flags(verbose, quiet);

    let _ = tracing_subscriber::fmt()
        .with_max_level(level.max_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
