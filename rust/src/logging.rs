//! Subscriber setup, run once from `FfiApp::new()`.
//!
//! iOS logs go to os_log and to `<data_dir>/docsmith.log` (readable from the
//! simulator container). Android logs go to logcat. Everything else, tests
//! included, logs to stderr.
//!
//! `DOCSMITH_LOG` replaces the default filter on every platform.

const LOG_ENV: &str = "DOCSMITH_LOG";
#[cfg(any(target_os = "ios", target_os = "android"))]
const MOBILE_FILTER: &str = "docsmith_core=debug,docsmith_sqlite_storage=info,refinery_core=warn,info";
#[cfg(not(any(target_os = "ios", target_os = "android")))]
const DESKTOP_FILTER: &str = "docsmith_core=debug,info";

fn env_filter(default: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
}

#[cfg(target_os = "ios")]
fn init_platform(data_dir: &str) {
    use tracing_subscriber::prelude::*;

    let _ = std::fs::create_dir_all(data_dir);
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(std::path::Path::new(data_dir).join("docsmith.log"))
        .ok();
    let file_layer = log_file.map(|file| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter(MOBILE_FILTER))
        .with(tracing_oslog::OsLogger::new("com.docsmith.app", "core"))
        .with(file_layer)
        .try_init();
}

#[cfg(target_os = "android")]
fn init_platform(_data_dir: &str) {
    use tracing_subscriber::prelude::*;

    let logcat = paranoid_android::layer("docsmith").with_filter(env_filter(MOBILE_FILTER));
    let _ = tracing_subscriber::registry().with(logcat).try_init();
}

#[cfg(not(any(target_os = "ios", target_os = "android")))]
fn init_platform(_data_dir: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DESKTOP_FILTER))
        .with_test_writer()
        .try_init();
}

pub fn init_logging(data_dir: &str) {
    init_platform(data_dir);
    tracing::debug!(target: "docsmith_core::logging", "logging initialized");
}
