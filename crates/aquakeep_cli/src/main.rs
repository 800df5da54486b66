//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `aquakeep_core` linkage.
//! - Build the bundled backend and print per-store record counts.
//! - Route core log events to a rolling file under the system temp directory.

use aquakeep_core::{init_logging, Backend, BackendConfig, LogConfig};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    println!("aquakeep_core ping={}", aquakeep_core::ping());
    println!("aquakeep_core version={}", aquakeep_core::core_version());

    let log_config = log_config();
    match init_logging(&log_config) {
        Ok(()) => println!("logging status=ok dir={}", log_config.log_dir),
        // Counts below are printed either way.
        Err(err) => eprintln!("logging status=error error={err}"),
    }

    let backend = match Backend::from_config(&BackendConfig::immediate()) {
        Ok(backend) => backend,
        Err(err) => {
            eprintln!("aquakeep_core seed=error error={err}");
            return ExitCode::FAILURE;
        }
    };

    for (kind, count) in backend.counts() {
        println!("store kind=\"{kind}\" records={count}");
    }
    let feeds = backend.consumables().find_feed_consumables().await;
    println!("feed consumables={}", feeds.len());

    ExitCode::SUCCESS
}

fn log_config() -> LogConfig {
    let log_dir = std::env::temp_dir().join("aquakeep");
    LogConfig::new(log_dir.to_string_lossy())
}
