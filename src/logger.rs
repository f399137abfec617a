//! Logger setup for the adev binary.

/// Initializes the global `env_logger` backend.
///
/// Verbose mode shows per-file and per-command debug output;
/// otherwise only the step-by-step info messages are printed.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
