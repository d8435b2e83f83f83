use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file path.
pub const LOG_ENV: &str = "CIVICTRACK_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default; the embedding UI owns stdout.
/// Set `CIVICTRACK_LOG` to a file path to enable it. The filter comes from
/// `RUST_LOG` and falls back to `info`.
///
/// Returns the path actually written to, which is made unique per process
/// as `{path}.{timestamp}.{pid}`.
pub fn init_tracing() -> Option<String> {
    let log_path = std::env::var(LOG_ENV).ok()?;

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A subscriber installed by the host application wins.
    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    Some(unique_path)
}
