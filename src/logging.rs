use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

/// Installs a compact `tracing` subscriber on stderr.
///
/// `verbosity` counts `-v` flags: 0 shows warnings, 1 info, 2 debug, 3 and
/// above trace.
pub fn init_logging(verbosity: u8) -> Result<(), SetGlobalDefaultError> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
