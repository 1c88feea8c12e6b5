//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `sampledata_core` linkage and print the seeded content shape.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Logging is enabled when `SAMPLEDATA_LOG_DIR` is set; the level comes from
//! `SAMPLEDATA_LOG_LEVEL` or the build default.

use sampledata_core::{default_log_level, init_logging, SampleDataSource, ALL_GROUPS_ID};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("SAMPLEDATA_LOG_DIR") {
        let level = std::env::var("SAMPLEDATA_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("sampledata logging disabled: {err}");
        }
    }

    println!("sampledata_core ping={}", sampledata_core::ping());
    println!("sampledata_core version={}", sampledata_core::core_version());

    let source = SampleDataSource::new();
    let groups = match source.get_groups(ALL_GROUPS_ID) {
        Ok(groups) => groups,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    for group in groups {
        let group = group.borrow();
        println!(
            "group id={} title={:?} items={} top_items={}",
            group.unique_id(),
            group.title(),
            group.items().len(),
            group.top_items().len()
        );
    }
    ExitCode::SUCCESS
}
