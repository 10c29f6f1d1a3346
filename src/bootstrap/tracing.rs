//! Tracing configuration for the portfolio CLI
//!
//! Installs the tracing-subscriber used by every crate in the workspace.
//! Output goes to stderr so that rendered views on stdout stay clean.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for the workspace crates
/// - **Production**: info level, controller recomputations stay quiet
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        if is_dev { "pf_app=debug" } else { "pf_app=info" }.to_string(),
        if is_dev {
            "pf_infra=debug"
        } else {
            "pf_infra=info"
        }
        .to_string(),
        if is_dev {
            "pf_core=debug"
        } else {
            "pf_core=warn"
        }
        .to_string(),
    ]
}

/// Initialize the tracing subscriber with appropriate configuration
///
/// ## Behavior / 行为
///
/// - **Environment filter**: Respects RUST_LOG, with the defaults above
/// - **Format**: `2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message`
///
/// ## Errors / 错误
///
/// Returns `Err` if:
/// - Subscriber is already registered (should only call once)
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
